//! The single page served at `/`.
//!
//! A Leaflet client for the API: year sliders, city and artist pickers, the venue map with
//! its summary, and the artist career map. Every control change posts the selection to
//! `/v1/dashboard` and redraws from the response.

pub const INDEX_HTML: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1" />
  <title>Jazz Map</title>
  <link rel="stylesheet" href="https://cdnjs.cloudflare.com/ajax/libs/leaflet/1.9.4/leaflet.css" crossorigin="anonymous" />
  <script src="https://cdnjs.cloudflare.com/ajax/libs/leaflet/1.9.4/leaflet.js" crossorigin="anonymous"></script>
  <style>
    body { margin: 0; font-family: sans-serif; display: flex; min-height: 100vh; }
    aside { width: 280px; padding: 1rem; background: #f4f1ea; box-sizing: border-box; }
    main { flex: 1; padding: 1rem; }
    .map { height: 460px; margin-bottom: 1rem; }
    select[multiple] { width: 100%; height: 10rem; }
    label { display: block; margin-top: 0.75rem; font-weight: bold; }
    .row { display: flex; gap: 1rem; }
    .row > div:first-child { flex: 3; }
    .row > div:last-child { flex: 1; }
    #error { color: #a00; }
  </style>
</head>
<body>
  <aside>
    <label>Years <span id="years-label"></span></label>
    <input id="year-a" type="range" />
    <input id="year-b" type="range" />
    <label for="cities">Cities</label>
    <select id="cities" multiple></select>
    <label for="artists">Artists</label>
    <select id="artists" multiple></select>
    <p id="error"></p>
  </aside>
  <main>
    <div class="row">
      <div>
        <h2 id="venue-title"></h2>
        <h4 id="venue-subtitle"></h4>
        <div id="venue-map" class="map"></div>
      </div>
      <div>
        <h3 id="summary-heading"></h3>
        <ul id="summary"></ul>
      </div>
    </div>
    <h2 id="artist-title"></h2>
    <h4 id="artist-subtitle"></h4>
    <div id="artist-map" class="map"></div>
  </main>
  <script>
    const tiles = () => L.tileLayer('https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png', {
      attribution: '&copy; OpenStreetMap contributors'
    });
    const venueMap = L.map('venue-map');
    const artistMap = L.map('artist-map');
    tiles().addTo(venueMap);
    tiles().addTo(artistMap);
    const venueLayer = L.layerGroup().addTo(venueMap);
    const artistLayer = L.layerGroup().addTo(artistMap);
    let viewportsSet = false;

    function onMapClick(map, kind) {
      map.on('click', (e) => {
        L.popup()
          .setLatLng(e.latlng)
          .setContent('Latitude: ' + e.latlng.lat.toFixed(4) + '<br>Longitude: ' + e.latlng.lng.toFixed(4))
          .openOn(map);
        fetch('/v1/session/last-clicked', {
          method: 'POST',
          headers: { 'Content-Type': 'application/json' },
          body: JSON.stringify({ map: kind, lat: e.latlng.lat, lng: e.latlng.lng })
        });
      });
    }
    onMapClick(venueMap, 'venue');
    onMapClick(artistMap, 'artist');

    function marker(m) {
      const circle = L.circleMarker([m.position.lat, m.position.lng], {
        radius: m.radius, color: m.color, fill: m.fill, fillOpacity: m.fill_opacity,
        interactive: m.interactive
      });
      circle.bindPopup(m.popup_html, { maxWidth: m.popup_max_width });
      if (m.tooltip) circle.bindTooltip(m.tooltip);
      return circle;
    }

    // Click order of each multiselect. Artist colors follow this order, not the option order.
    const selectionOrder = { cities: [], artists: [] };

    function syncOrder(id) {
      const now = Array.from(document.getElementById(id).selectedOptions).map((o) => o.value);
      const kept = selectionOrder[id].filter((v) => now.includes(v));
      const added = now.filter((v) => !kept.includes(v));
      selectionOrder[id] = kept.concat(added);
    }

    function fill(id, values) {
      const select = document.getElementById(id);
      select.innerHTML = '';
      for (const v of values) {
        const option = new Option(v, v, true, true);
        select.add(option);
      }
      selectionOrder[id] = values.slice();
      select.addEventListener('change', () => {
        syncOrder(id);
        refresh();
      });
    }

    async function refresh() {
      const a = Number(document.getElementById('year-a').value);
      const b = Number(document.getElementById('year-b').value);
      document.getElementById('years-label').textContent = Math.min(a, b) + ' - ' + Math.max(a, b);
      const response = await fetch('/v1/dashboard', {
        method: 'POST',
        headers: { 'Content-Type': 'application/json' },
        body: JSON.stringify({ years: [a, b], cities: selectionOrder.cities, artists: selectionOrder.artists })
      });
      const body = await response.json();
      if (!response.ok) {
        document.getElementById('error').textContent = body.message;
        return;
      }
      document.getElementById('error').textContent = '';
      draw(body);
    }

    function draw(view) {
      const venues = view.venue_map;
      const artists = view.artist_map;
      if (!viewportsSet) {
        venueMap.setView([venues.viewport.center.lat, venues.viewport.center.lng], venues.viewport.zoom);
        artistMap.setView([artists.viewport.center.lat, artists.viewport.center.lng], artists.viewport.zoom);
        viewportsSet = true;
      }

      document.getElementById('venue-title').textContent = venues.title;
      document.getElementById('venue-subtitle').textContent = venues.subtitle;
      venueLayer.clearLayers();
      venues.markers.forEach((m) => marker(m).addTo(venueLayer));

      const summary = view.venue_summary;
      document.getElementById('summary-heading').textContent = summary.heading;
      const list = document.getElementById('summary');
      list.innerHTML = '';
      for (const c of summary.counts) {
        const item = document.createElement('li');
        item.textContent = c.city + ': ' + c.count;
        list.appendChild(item);
      }

      document.getElementById('artist-title').textContent = artists.title;
      document.getElementById('artist-subtitle').textContent = artists.subtitle;
      artistLayer.clearLayers();
      for (const path of artists.paths) {
        for (const s of path.segments) {
          L.polyline([[s.from.lat, s.from.lng], [s.to.lat, s.to.lng]], { color: s.color, weight: s.weight })
            .bindTooltip(s.tooltip || path.name)
            .addTo(artistLayer);
        }
        path.markers.forEach((m) => marker(m).addTo(artistLayer));
      }
    }

    async function init() {
      const response = await fetch('/v1/options');
      const options = await response.json();
      if (!response.ok) {
        document.getElementById('error').textContent = options.message;
        return;
      }
      for (const id of ['year-a', 'year-b']) {
        const slider = document.getElementById(id);
        slider.min = options.year_min;
        slider.max = options.year_max;
        slider.addEventListener('input', refresh);
      }
      document.getElementById('year-a').value = options.year_max;
      document.getElementById('year-b').value = options.year_min;
      fill('cities', options.cities);
      fill('artists', options.artists);
      refresh();
    }
    init();
  </script>
</body>
</html>
"##;
