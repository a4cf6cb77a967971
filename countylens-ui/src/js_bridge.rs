//! Typed wrappers around Plotly interop via `js_sys::eval()`.
//!
//! Plotly is loaded from a CDN `<script>` tag in `index.html` and used as a
//! global. Figures come from the API as finished JSON specs, so the bridge
//! only has to hand them over and collect pan/zoom events back.
//!
//! Relayout events are queued on `window.__clRelayout` by a listener wired
//! once per map container; the app drains the queue on a timer. A suppression
//! flag is held while `Plotly.react` runs so programmatic re-renders do not
//! echo back as interactions.

use crate::state::global::GeoPoint;

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('countylens JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Install the shared relayout queue. Call once at app startup.
pub fn init_relayout_queue() {
    call_js("window.__clRelayout = []; window.__clSuppress = false;");
}

/// One queued pan/zoom interaction, already reduced to the fields the
/// update API understands.
#[derive(Debug, Clone, Copy, serde::Deserialize)]
pub struct RelayoutEvent {
    /// 1 or 2, matching the map container
    pub pane: u8,
    pub center: Option<GeoPoint>,
    pub zoom: Option<f64>,
}

/// Render a figure into a map container.
///
/// Uses a polling loop to wait for the Plotly global and the container DOM
/// element before rendering; the first render also wires the relayout
/// listener for that container.
pub fn render_map(container_id: &str, pane: u8, figure_json: &str) {
    // A figure spec is valid JS object literal syntax, so it can be staged
    // on window without any string escaping.
    call_js(&format!("window.__clFigure{} = {};", pane, figure_json));

    call_js(&format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                var el = document.getElementById('{container_id}');
                if (typeof Plotly === 'undefined' || !el) return;
                clearInterval(poll);
                var fig = window.__clFigure{pane};
                delete window.__clFigure{pane};
                if (!fig) return;
                window.__clSuppress = true;
                Plotly.react(el, fig.data, fig.layout, {{scrollZoom: true, responsive: true}}).then(function() {{
                    if (!el.__clWired) {{
                        el.__clWired = true;
                        el.on('plotly_relayout', function(ev) {{
                            if (window.__clSuppress) return;
                            var center = ev['map.center'] || null;
                            var zoom = (ev['map.zoom'] === undefined) ? null : ev['map.zoom'];
                            if (center === null && zoom === null) return;
                            window.__clRelayout.push({{pane: {pane}, center: center, zoom: zoom}});
                        }});
                    }}
                    setTimeout(function() {{ window.__clSuppress = false; }}, 0);
                }});
            }}, 100);
        }})();
        "#,
    ));
}

/// Drain all queued relayout events, oldest first.
pub fn drain_relayout() -> Vec<RelayoutEvent> {
    let code = "JSON.stringify((function() { \
        var q = window.__clRelayout; \
        if (!q || !q.length) return []; \
        return q.splice(0, q.length); \
    })())";

    let value = match js_sys::eval(code) {
        Ok(value) => value,
        Err(_) => return Vec::new(),
    };

    match value.as_string() {
        Some(json) => serde_json::from_str(&json).unwrap_or_default(),
        None => Vec::new(),
    }
}
