#![allow(dead_code)]

use std::sync::Arc;

use jazz_map::config::MapSettings;
use jazz_map::db::{DatasetCache, Datasets, LocalRepository};
use jazz_map::parsing::{parse_artist_locations_csv, parse_venues_csv};

/// Venue sheet fixture. The Cotton Club row has an unparseable latitude.
pub const VENUES_CSV: &str = "\
city,venue,latitude,longitude,start year,end year,location
New York,Birdland,40.7621,-73.9857,1949,1965,Midtown
New York,Village Vanguard,40.7359,-74.0014,1935,2000,Greenwich Village
New York,Cotton Club,unknown,-73.9400,1923,1940,Harlem
Chicago,Sunset Cafe,41.8310,-87.6210,1921,1937,Bronzeville
Chicago,Green Mill,41.9690,-87.6598,1907,2000,
Kansas City,Reno Club,39.0900,-94.5700,1930,1948,18th and Vine
New Orleans,Funky Butt Hall,29.9560,-90.0720,1902,1917,
";

/// Artist sheet fixture. Bix Beiderbecke's only row has no overview.
pub const ARTISTS_CSV: &str = "\
name,location number,latitude,longitude,city,birthday,instrument,overview,article link
Louis Armstrong,1,29.9511,-90.0715,New Orleans,1901-08-04,trumpet,Born in New Orleans,https://example.org/armstrong
Louis Armstrong,2,41.8781,-87.6298,Chicago,1901-08-04,trumpet,Joined King Oliver,https://example.org/armstrong
Louis Armstrong,3,40.7128,-74.0060,New York,1901-08-04,trumpet,\"Hot Five, Hot Seven\",https://example.org/armstrong
Charlie Parker,1,39.0997,-94.5786,Kansas City,1920-08-29,alto saxophone,Kansas City roots,https://example.org/parker
Charlie Parker,2,40.7128,-74.0060,New York,1920-08-29,alto saxophone,Bebop on 52nd Street,https://example.org/parker
Bix Beiderbecke,1,41.5236,-90.5776,Davenport,1903-03-10,cornet,,https://example.org/bix
";

pub fn fixture_datasets() -> Datasets {
    Datasets::new(
        parse_venues_csv(VENUES_CSV.as_bytes()).expect("venue fixture parses"),
        parse_artist_locations_csv(ARTISTS_CSV.as_bytes()).expect("artist fixture parses"),
    )
}

pub fn fixture_repository() -> LocalRepository {
    LocalRepository::from_csv_str(VENUES_CSV, ARTISTS_CSV).expect("fixture repository")
}

pub fn fixture_cache() -> Arc<DatasetCache> {
    Arc::new(DatasetCache::new(Arc::new(fixture_repository())))
}

pub fn map_settings() -> MapSettings {
    MapSettings::default()
}

pub fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}
