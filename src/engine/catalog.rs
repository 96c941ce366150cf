//! Built-in search engines, in engine picker order.

use super::SettingsEngine;

const fn engine(
    id: &'static str,
    name: &'static str,
    url: &'static str,
    descr: &'static str,
) -> SettingsEngine {
    SettingsEngine {
        id,
        name,
        descr,
        url,
    }
}

/// Available search engines: (id, display_name, url_template, description)
pub static ENGINES: [SettingsEngine; 21] = [
    engine("bing", "Bing", "https://www.bing.com/search?q=QUERY", "Search"),
    engine("bing-imgs", "Bing (Images)", "https://www.bing.com/images/search?q=QUERY", "Search for images"),
    engine("bing-maps", "Bing (Maps)", "https://www.bing.com/maps/search?q=QUERY", "Search for maps"),
    engine("bing-news", "Bing (News)", "https://www.bing.com/news/search?q=QUERY", "Search for news"),
    engine("bing-vids", "Bing (Videos)", "https://www.bing.com/videos/search?q=QUERY", "Search for videos"),
    engine("ddgo", "DuckDuckGo", "https://duckduckgo.com/?q=QUERY", "Search"),
    engine("ddgo-lite", "DuckDuckGo (Lite)", "https://lite.duckduckgo.com/lite/?q=QUERY", "Search"),
    engine("ddgo-imgs", "DuckDuckGo (Images)", "https://duckduckgo.com/?q=QUERY&iax=images&ia=images", "Search for images"),
    engine("ddgo-maps", "DuckDuckGo (Maps)", "https://duckduckgo.com/?q=QUERY&iax=maps&ia=maps", "Search for maps"),
    engine("ddgo-news", "DuckDuckGo (News)", "https://duckduckgo.com/?q=QUERY&iar=news&ia=news", "Search for news"),
    engine("ddgo-vids", "DuckDuckGo (Videos)", "https://duckduckgo.com/?q=QUERY&iax=videos&ia=videos", "Search for videos"),
    engine("goog", "Google", "https://www.google.com/search?q=QUERY", "Search"),
    engine("goog-imgs", "Google (Images)", "https://www.google.com/search?q=QUERY&tbm=isch", "Search for images"),
    engine("goog-maps", "Google (Maps)", "https://www.google.com/maps/search/QUERY", "Search for maps"),
    engine("goog-news", "Google (News)", "https://www.google.com/search?q=QUERY&tbm=nws", "Search for news"),
    engine("goog-vids", "Google (Videos)", "https://www.google.com/search?q=QUERY&tbm=vid", "Search for videos"),
    engine("ovrs", "Openverse (All Content)", "https://openverse.org/search/?q=QUERY", "Search for content"),
    engine("ovrs-auds", "Openverse (Audio)", "https://openverse.org/search/audio?q=QUERY", "Search for audio"),
    engine("ovrs-imgs", "Openverse (Images)", "https://openverse.org/search/image?q=QUERY", "Search for images"),
    engine("wkpd", "Wikipedia", "https://en.wikipedia.org/w/index.php?search=QUERY", "Search Wikipedia"),
    engine("wfal", "Wolfram|Alpha", "https://www.wolframalpha.com/input?i=QUERY", "Calculate / Know about"),
];

/// Index into [`ENGINES`] keyed by engine id.
pub(super) static ENGINES_BY_ID: phf::Map<&'static str, usize> = phf::phf_map! {
    "bing" => 0,
    "bing-imgs" => 1,
    "bing-maps" => 2,
    "bing-news" => 3,
    "bing-vids" => 4,
    "ddgo" => 5,
    "ddgo-lite" => 6,
    "ddgo-imgs" => 7,
    "ddgo-maps" => 8,
    "ddgo-news" => 9,
    "ddgo-vids" => 10,
    "goog" => 11,
    "goog-imgs" => 12,
    "goog-maps" => 13,
    "goog-news" => 14,
    "goog-vids" => 15,
    "ovrs" => 16,
    "ovrs-auds" => 17,
    "ovrs-imgs" => 18,
    "wkpd" => 19,
    "wfal" => 20,
};
