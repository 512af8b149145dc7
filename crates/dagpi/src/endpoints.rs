//! Static catalog of the Dagpi routes.
//!
//! Every wrapper on [`crate::Client`] resolves to exactly one entry here, so
//! paths, parameter names and response kinds live in a single place.

use crate::error::{DagpiError, DagpiResult};
use crate::http::url_builder::UrlBuilder;
use std::fmt;
use std::str::FromStr;
use url::Url;

/// How the response body of an endpoint is handled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EndpointKind {
    /// JSON object, decoded into a map
    Data,
    /// Raw image bytes, returned untouched
    Image,
}

impl EndpointKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EndpointKind::Data => "data",
            EndpointKind::Image => "image",
        }
    }
}

impl fmt::Display for EndpointKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EndpointKind {
    type Err = DagpiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "data" => Ok(EndpointKind::Data),
            "image" | "images" => Ok(EndpointKind::Image),
            _ => Err(DagpiError::invalid_parameter(
                "kind",
                s,
                "expected 'data' or 'image'",
            )),
        }
    }
}

/// One remote route: its path, query parameter names (in wire order) and
/// response kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Endpoint {
    pub name: &'static str,
    pub path: &'static str,
    pub kind: EndpointKind,
    pub params: &'static [&'static str],
    pub description: &'static str,
}

impl Endpoint {
    const fn data(
        name: &'static str,
        path: &'static str,
        params: &'static [&'static str],
        description: &'static str,
    ) -> Self {
        Self {
            name,
            path,
            kind: EndpointKind::Data,
            params,
            description,
        }
    }

    const fn image(
        name: &'static str,
        path: &'static str,
        params: &'static [&'static str],
        description: &'static str,
    ) -> Self {
        Self {
            name,
            path,
            kind: EndpointKind::Image,
            params,
            description,
        }
    }

    /// Pair positional values with this endpoint's parameter names.
    pub fn query<'a>(&self, values: &[&'a str]) -> DagpiResult<Vec<(&'static str, &'a str)>> {
        if values.len() != self.params.len() {
            return Err(DagpiError::invalid_parameter(
                self.name,
                values.join(", "),
                format!(
                    "expected {} value(s) for [{}]",
                    self.params.len(),
                    self.params.join(", ")
                ),
            ));
        }

        Ok(self.params.iter().copied().zip(values.iter().copied()).collect())
    }

    /// Build the full request URL against `base_url`.
    pub fn url(&self, base_url: &str, values: &[&str]) -> DagpiResult<Url> {
        let query = self.query(values)?;
        UrlBuilder::join_with_query(base_url, self.path, &query)
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.kind, self.name)
    }
}

/// JSON endpoints under `/data`
pub mod data {
    use super::Endpoint;

    pub const WTP: Endpoint = Endpoint::data(
        "wtp",
        "/data/wtp",
        &[],
        "Random Pokémon and its silhouette for guessing games",
    );

    pub const ROAST: Endpoint = Endpoint::data("roast", "/data/roast", &[], "A random roast");

    pub const JOKE: Endpoint = Endpoint::data("joke", "/data/joke", &[], "A random joke with its id");

    pub const FACT: Endpoint = Endpoint::data("fact", "/data/fact", &[], "A random fact");

    pub const EIGHT_BALL: Endpoint = Endpoint::data(
        "8ball",
        "/data/8ball",
        &[],
        "A magic 8-ball answer",
    );

    pub const YOMAMA: Endpoint = Endpoint::data("yomama", "/data/yomama", &[], "A random yo mama joke");

    pub const RANDOM_WAIFU: Endpoint = Endpoint::data(
        "waifu",
        "/data/waifu",
        &[],
        "Data about a random waifu",
    );

    pub const WAIFU_SEARCH: Endpoint = Endpoint::data(
        "waifu-search",
        "/data/waifu",
        &["q"],
        "Data about a waifu looked up by name",
    );

    pub const PICKUP_LINE: Endpoint = Endpoint::data(
        "pickupline",
        "/data/pickupline",
        &[],
        "A pickup line and its category",
    );

    pub const HEADLINE: Endpoint = Endpoint::data(
        "headline",
        "/data/headline",
        &[],
        "A news headline that may or may not be fake",
    );

    pub const LOGO: Endpoint = Endpoint::data(
        "logo",
        "/data/logo",
        &[],
        "A random brand logo for guess-the-logo games",
    );

    pub const FLAG: Endpoint = Endpoint::data("flag", "/data/flag", &[], "A random country flag");

    pub const CAPTCHA: Endpoint = Endpoint::data(
        "captcha",
        "/data/captcha",
        &[],
        "A captcha image and its answer",
    );

    pub const TYPERACER: Endpoint = Endpoint::data(
        "typeracer",
        "/data/typeracer",
        &[],
        "A sentence rendered on an image for typeracer games",
    );

    pub static ALL: &[Endpoint] = &[
        WTP,
        ROAST,
        JOKE,
        FACT,
        EIGHT_BALL,
        YOMAMA,
        RANDOM_WAIFU,
        WAIFU_SEARCH,
        PICKUP_LINE,
        HEADLINE,
        LOGO,
        FLAG,
        CAPTCHA,
        TYPERACER,
    ];
}

/// Image manipulation endpoints under `/image`
pub mod image {
    use super::Endpoint;

    pub const PIXEL: Endpoint = Endpoint::image(
        "pixel",
        "/image/pixel/",
        &["url"],
        "Pixelate an image",
    );

    pub const MIRROR: Endpoint = Endpoint::image(
        "mirror",
        "/image/mirror/",
        &["url"],
        "Mirror an image along the y-axis",
    );

    pub const FLIP: Endpoint = Endpoint::image(
        "flip",
        "/image/flip/",
        &["url"],
        "Flip an image upside down",
    );

    pub const COLORS: Endpoint = Endpoint::image(
        "colors",
        "/image/colors/",
        &["url"],
        "Palette of the colors present in an image",
    );

    pub const AMERICA: Endpoint = Endpoint::image(
        "america",
        "/image/america/",
        &["url"],
        "American flag overlay",
    );

    pub const COMMUNISM: Endpoint = Endpoint::image(
        "communism",
        "/image/communism/",
        &["url"],
        "Soviet flag overlay",
    );

    pub const TRIGGERED: Endpoint = Endpoint::image(
        "triggered",
        "/image/triggered/",
        &["url"],
        "Triggered gif",
    );

    pub const EXPAND: Endpoint = Endpoint::image(
        "expand",
        "/image/expand/",
        &["url"],
        "Animation that stretches an image",
    );

    pub const WASTED: Endpoint = Endpoint::image(
        "wasted",
        "/image/wasted/",
        &["url"],
        "GTA V wasted screen",
    );

    pub const SKETCH: Endpoint = Endpoint::image(
        "sketch",
        "/image/sketch/",
        &["url"],
        "Pencil sketch effect",
    );

    pub const SPIN: Endpoint = Endpoint::image("spin", "/image/spin/", &["url"], "Spinning gif");

    pub const PETPET: Endpoint = Endpoint::image("petpet", "/image/petpet/", &["url"], "Pet-pet gif");

    pub const BONK: Endpoint = Endpoint::image("bonk", "/image/bonk/", &["url"], "Bonk meme");

    pub const BOMB: Endpoint = Endpoint::image("bomb", "/image/bomb/", &["url"], "Explosion gif");

    pub const SHAKE: Endpoint = Endpoint::image("shake", "/image/shake/", &["url"], "Wiggling gif");

    pub const INVERT: Endpoint = Endpoint::image("invert", "/image/invert/", &["url"], "Invert colors");

    pub const SOBEL: Endpoint = Endpoint::image(
        "sobel",
        "/image/sobel/",
        &["url"],
        "Sobel edge detection",
    );

    pub const HOG: Endpoint = Endpoint::image(
        "hog",
        "/image/hog/",
        &["url"],
        "Histogram of oriented gradients",
    );

    pub const TRIANGLE: Endpoint = Endpoint::image(
        "triangle",
        "/image/triangle/",
        &["url"],
        "Low-poly triangle effect",
    );

    pub const BLUR: Endpoint = Endpoint::image("blur", "/image/blur/", &["url"], "Blur an image");

    pub const RGB: Endpoint = Endpoint::image(
        "rgb",
        "/image/rgb/",
        &["url"],
        "RGB histogram of an image",
    );

    pub const ANGEL: Endpoint = Endpoint::image(
        "angel",
        "/image/angel/",
        &["url"],
        "Image on an angel's face",
    );

    pub const SATAN: Endpoint = Endpoint::image(
        "satan",
        "/image/satan/",
        &["url"],
        "Image on the devil",
    );

    pub const DELETE: Endpoint = Endpoint::image(
        "delete",
        "/image/delete/",
        &["url"],
        "Windows delete dialog meme",
    );

    pub const FEDORA: Endpoint = Endpoint::image(
        "fedora",
        "/image/fedora/",
        &["url"],
        "Fedora tip meme",
    );

    pub const HITLER: Endpoint = Endpoint::image(
        "hitler",
        "/image/hitler/",
        &["url"],
        "Worse than Hitler meme",
    );

    pub const LEGO: Endpoint = Endpoint::image(
        "lego",
        "/image/lego/",
        &["url"],
        "Turn pixel groups into lego bricks",
    );

    pub const WANTED: Endpoint = Endpoint::image("wanted", "/image/wanted/", &["url"], "Wanted poster");

    pub const STRINGIFY: Endpoint = Endpoint::image(
        "stringify",
        "/image/stringify/",
        &["url"],
        "Ball of yarn effect",
    );

    pub const BURN: Endpoint = Endpoint::image(
        "burn",
        "/image/burn/",
        &["url"],
        "Set an image on fire",
    );

    pub const EARTH: Endpoint = Endpoint::image(
        "earth",
        "/image/earth/",
        &["url"],
        "Green and blue earth tint",
    );

    pub const FREEZE: Endpoint = Endpoint::image("freeze", "/image/freeze/", &["url"], "Blue ice tint");

    pub const GROUND: Endpoint = Endpoint::image(
        "ground",
        "/image/ground/",
        &["url"],
        "Earthy ground tint",
    );

    pub const MOSIAC: Endpoint = Endpoint::image(
        "mosiac",
        "/image/mosiac/",
        &["url"],
        "Roman mosaic effect",
    );

    pub const SITH: Endpoint = Endpoint::image(
        "sith",
        "/image/sith/",
        &["url"],
        "Laughs in Sithlord meme",
    );

    pub const JAIL: Endpoint = Endpoint::image(
        "jail",
        "/image/jail/",
        &["url"],
        "Put an image behind bars",
    );

    pub const SHATTER: Endpoint = Endpoint::image(
        "shatter",
        "/image/shatter/",
        &["url"],
        "Shattered glass effect",
    );

    pub const PRIDE: Endpoint = Endpoint::image(
        "pride",
        "/image/pride/",
        &["url", "flag"],
        "Pride flag overlay",
    );

    pub const TRASH: Endpoint = Endpoint::image(
        "trash",
        "/image/trash/",
        &["url"],
        "Image is trash meme",
    );

    pub const DEEPFRY: Endpoint = Endpoint::image(
        "deepfry",
        "/image/deepfry/",
        &["url"],
        "Deep fry an image",
    );

    pub const ASCII: Endpoint = Endpoint::image("ascii", "/image/ascii/", &["url"], "ASCII art effect");

    pub const CHARCOAL: Endpoint = Endpoint::image(
        "charcoal",
        "/image/charcoal/",
        &["url"],
        "Charcoal drawing effect",
    );

    pub const POSTER: Endpoint = Endpoint::image(
        "poster",
        "/image/poster/",
        &["url"],
        "Posterize an image",
    );

    pub const SEPIA: Endpoint = Endpoint::image("sepia", "/image/sepia/", &["url"], "Sepia tone");

    pub const SWIRL: Endpoint = Endpoint::image("swirl", "/image/swirl/", &["url"], "Swirl an image");

    pub const PAINT: Endpoint = Endpoint::image(
        "paint",
        "/image/paint/",
        &["url"],
        "Oil painting effect",
    );

    pub const NIGHT: Endpoint = Endpoint::image(
        "night",
        "/image/night/",
        &["url"],
        "Turn day into night",
    );

    pub const RAINBOW: Endpoint = Endpoint::image(
        "rainbow",
        "/image/rainbow/",
        &["url"],
        "Trippy rainbow light effects",
    );

    pub const MAGIK: Endpoint = Endpoint::image(
        "magik",
        "/image/magik/",
        &["url"],
        "Liquid rescale distortion",
    );

    pub const FIVE_GUYS_ONE_GIRL: Endpoint = Endpoint::image(
        "5g1g",
        "/image/5g1g/",
        &["url", "url2"],
        "Five guys one girl meme",
    );

    pub const WHY_ARE_YOU_GAY: Endpoint = Endpoint::image(
        "whyareyougay",
        "/image/whyareyougay/",
        &["url", "url2"],
        "Why are you gay meme",
    );

    pub const SLAP: Endpoint = Endpoint::image(
        "slap",
        "/image/slap/",
        &["url", "url2"],
        "One image slapping another",
    );

    pub const OBAMA: Endpoint = Endpoint::image(
        "obama",
        "/image/obama/",
        &["url", "url2"],
        "Obama awarding himself meme",
    );

    pub const TWEET: Endpoint = Endpoint::image(
        "tweet",
        "/image/tweet/",
        &["url", "username", "text"],
        "Fake tweet",
    );

    pub const YOUTUBE_COMMENT: Endpoint = Endpoint::image(
        "yt",
        "/image/yt/",
        &["url", "username", "text", "dark"],
        "Fake YouTube comment",
    );

    pub const DISCORD: Endpoint = Endpoint::image(
        "discord",
        "/image/discord/",
        &["url", "username", "text", "dark"],
        "Fake Discord message",
    );

    pub const RETROMEME: Endpoint = Endpoint::image(
        "retromeme",
        "/image/retromeme/",
        &["url", "top_text", "bottom_text"],
        "Classic top/bottom text meme",
    );

    pub const MOTIVATIONAL: Endpoint = Endpoint::image(
        "motiv",
        "/image/motiv/",
        &["url", "top_text", "bottom_text"],
        "Motivational poster",
    );

    pub const MODERNMEME: Endpoint = Endpoint::image(
        "modernmeme",
        "/image/modernmeme/",
        &["url", "text"],
        "Modern captioned meme",
    );

    pub const ELMO: Endpoint = Endpoint::image("elmo", "/image/elmo/", &["url"], "Burning Elmo meme");

    pub const TV_STATIC: Endpoint = Endpoint::image("tv", "/image/tv/", &["url"], "TV static effect");

    pub const RAIN: Endpoint = Endpoint::image("rain", "/image/rain/", &["url"], "Falling rain effect");

    pub const GLITCH: Endpoint = Endpoint::image("glitch", "/image/glitch/", &["url"], "Glitch effect");

    pub const GLITCH_STATIC: Endpoint = Endpoint::image(
        "glitchstatic",
        "/image/glitchstatic/",
        &["url"],
        "Static glitch effect",
    );

    pub const ALBUM: Endpoint = Endpoint::image("album", "/image/album/", &["url"], "Album cover");

    pub static ALL: &[Endpoint] = &[
        PIXEL,
        MIRROR,
        FLIP,
        COLORS,
        AMERICA,
        COMMUNISM,
        TRIGGERED,
        EXPAND,
        WASTED,
        SKETCH,
        SPIN,
        PETPET,
        BONK,
        BOMB,
        SHAKE,
        INVERT,
        SOBEL,
        HOG,
        TRIANGLE,
        BLUR,
        RGB,
        ANGEL,
        SATAN,
        DELETE,
        FEDORA,
        HITLER,
        LEGO,
        WANTED,
        STRINGIFY,
        BURN,
        EARTH,
        FREEZE,
        GROUND,
        MOSIAC,
        SITH,
        JAIL,
        SHATTER,
        PRIDE,
        TRASH,
        DEEPFRY,
        ASCII,
        CHARCOAL,
        POSTER,
        SEPIA,
        SWIRL,
        PAINT,
        NIGHT,
        RAINBOW,
        MAGIK,
        FIVE_GUYS_ONE_GIRL,
        WHY_ARE_YOU_GAY,
        SLAP,
        OBAMA,
        TWEET,
        YOUTUBE_COMMENT,
        DISCORD,
        RETROMEME,
        MOTIVATIONAL,
        MODERNMEME,
        ELMO,
        TV_STATIC,
        RAIN,
        GLITCH,
        GLITCH_STATIC,
        ALBUM,
    ];
}

/// Every endpoint, data first
pub fn all() -> impl Iterator<Item = &'static Endpoint> {
    data::ALL.iter().chain(image::ALL.iter())
}

/// Endpoints of one kind
pub fn of_kind(kind: EndpointKind) -> &'static [Endpoint] {
    match kind {
        EndpointKind::Data => data::ALL,
        EndpointKind::Image => image::ALL,
    }
}

/// Look up an endpoint by catalog name, case-insensitively
pub fn find(kind: EndpointKind, name: &str) -> Option<&'static Endpoint> {
    of_kind(kind)
        .iter()
        .find(|endpoint| endpoint.name.eq_ignore_ascii_case(name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    const BASE: &str = "https://api.dagpi.xyz";

    #[test]
    fn test_catalog_size() {
        assert_eq!(data::ALL.len(), 14);
        assert_eq!(image::ALL.len(), 65);
        assert_eq!(all().count(), 79);
    }

    #[test]
    fn test_names_are_unique_per_kind() {
        for kind in [EndpointKind::Data, EndpointKind::Image] {
            let mut seen = HashSet::new();
            for endpoint in of_kind(kind) {
                assert!(seen.insert(endpoint.name), "duplicate name {}", endpoint.name);
                assert_eq!(endpoint.kind, kind);
            }
        }
    }

    #[test]
    fn test_path_shapes() {
        for endpoint in data::ALL {
            assert!(endpoint.path.starts_with("/data/"), "{}", endpoint.path);
        }
        for endpoint in image::ALL {
            assert!(endpoint.path.starts_with("/image/"), "{}", endpoint.path);
            assert!(endpoint.path.ends_with('/'), "{}", endpoint.path);
            assert_eq!(endpoint.params.first(), Some(&"url"), "{}", endpoint.name);
        }
    }

    #[test]
    fn test_find() {
        assert_eq!(find(EndpointKind::Image, "pixel"), Some(&image::PIXEL));
        assert_eq!(find(EndpointKind::Image, "PIXEL"), Some(&image::PIXEL));
        assert_eq!(find(EndpointKind::Data, "8ball"), Some(&data::EIGHT_BALL));
        assert_eq!(find(EndpointKind::Data, "pixel"), None);
        assert_eq!(find(EndpointKind::Image, "nope"), None);
    }

    #[test]
    fn test_kind_from_str() {
        assert_eq!("data".parse::<EndpointKind>().unwrap(), EndpointKind::Data);
        assert_eq!("Image".parse::<EndpointKind>().unwrap(), EndpointKind::Image);
        assert!("video".parse::<EndpointKind>().is_err());
    }

    #[test]
    fn test_data_urls_have_no_query() {
        assert_eq!(
            data::WTP.url(BASE, &[]).unwrap().as_str(),
            "https://api.dagpi.xyz/data/wtp"
        );
        assert_eq!(
            data::EIGHT_BALL.url(BASE, &[]).unwrap().as_str(),
            "https://api.dagpi.xyz/data/8ball"
        );
    }

    #[test]
    fn test_multi_param_url() {
        let url = image::YOUTUBE_COMMENT
            .url(BASE, &["https://a.b/c.png", "rusty", "hi & bye", "true"])
            .unwrap();

        assert_eq!(
            url.as_str(),
            "https://api.dagpi.xyz/image/yt/?url=https%3A%2F%2Fa.b%2Fc.png&username=rusty&text=hi+%26+bye&dark=true"
        );
    }

    #[test]
    fn test_every_endpoint_escapes_reserved_characters() {
        let value = "https://x.io/a b.png?size=1&v=2#frag";

        for endpoint in all() {
            let values = vec![value; endpoint.params.len()];
            let url = endpoint.url(BASE, &values).unwrap();

            assert_eq!(url.path(), endpoint.path, "{}", endpoint);
            assert_eq!(url.fragment(), None, "{}", endpoint);

            let decoded: Vec<(String, String)> = url
                .query_pairs()
                .map(|(k, v)| (k.into_owned(), v.into_owned()))
                .collect();
            let expected: Vec<(String, String)> = endpoint
                .params
                .iter()
                .map(|name| (name.to_string(), value.to_string()))
                .collect();
            assert_eq!(decoded, expected, "{}", endpoint);
        }
    }

    #[test]
    fn test_wrong_value_count_is_rejected() {
        let err = image::SLAP.query(&["only-one"]).unwrap_err();
        assert!(matches!(err, DagpiError::InvalidParameter { .. }));
        assert!(data::FACT.query(&["unexpected"]).is_err());
    }
}
