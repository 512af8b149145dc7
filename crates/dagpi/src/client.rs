//! Typed client: one async method per Dagpi route.
//!
//! ```no_run
//! # async fn demo() -> dagpi::DagpiResult<()> {
//! let client = dagpi::Client::new("my-token")?;
//! let joke = client.joke().await?;
//! let gif = client.triggered("https://example.com/avatar.png").await?;
//! # let _ = (joke, gif);
//! # Ok(())
//! # }
//! ```

use crate::config::ClientConfig;
use crate::endpoints::{self, data, image, Endpoint, EndpointKind};
use crate::error::{DagpiError, DagpiResult};
use crate::http::executor::{HttpExecutor, JsonMap};
use crate::pride::PrideFlag;
use bytes::Bytes;
use serde_json::Value as JsonValue;

/// Client handle holding the access token and a pooled HTTP client.
///
/// Cheap to clone; clones share the connection pool.
#[derive(Debug, Clone)]
pub struct Client {
    executor: HttpExecutor,
}

impl Client {
    /// Client for the public API with default timeouts
    pub fn new(token: impl Into<String>) -> DagpiResult<Self> {
        Self::with_config(ClientConfig::new(token))
    }

    pub fn with_config(config: ClientConfig) -> DagpiResult<Self> {
        Ok(Self {
            executor: HttpExecutor::new(&config)?,
        })
    }

    /// Client configured from `DAGPI_*` environment variables
    pub fn from_env() -> DagpiResult<Self> {
        Self::with_config(ClientConfig::from_env()?)
    }

    pub fn base_url(&self) -> &str {
        self.executor.base_url()
    }

    /// Access to the underlying executor, mostly for inspecting built requests
    pub fn executor(&self) -> &HttpExecutor {
        &self.executor
    }

    /// Call a data endpoint by catalog name with named query parameters.
    pub async fn data(&self, name: &str, params: &[(&str, &str)]) -> DagpiResult<JsonMap> {
        let endpoint = lookup(EndpointKind::Data, name)?;
        let values = ordered_values(endpoint, params)?;
        self.executor.get_json(endpoint, &values).await
    }

    /// Call an image endpoint by catalog name with named query parameters.
    ///
    /// Enumerated parameters are validated before anything is sent.
    pub async fn image(&self, name: &str, params: &[(&str, &str)]) -> DagpiResult<Bytes> {
        let endpoint = lookup(EndpointKind::Image, name)?;
        let values = ordered_values(endpoint, params)?;

        if endpoint == &image::PRIDE {
            let flag: PrideFlag = values[1].parse()?;
            return self.pride_flag(values[0], flag).await;
        }

        self.executor.get_bytes(endpoint, &values).await
    }

    async fn data_field(
        &self,
        endpoint: &Endpoint,
        field: &str,
    ) -> DagpiResult<Option<JsonValue>> {
        let mut map = self.executor.get_json(endpoint, &[]).await?;
        Ok(map.remove(field))
    }

    // Data endpoints

    /// Random Pokémon for "who's that Pokémon" games.
    pub async fn wtp(&self) -> DagpiResult<JsonMap> {
        self.executor.get_json(&data::WTP, &[]).await
    }

    /// The `roast` field of a random roast. `None` if the server omitted it.
    pub async fn roast(&self) -> DagpiResult<Option<JsonValue>> {
        self.data_field(&data::ROAST, "roast").await
    }

    pub async fn joke(&self) -> DagpiResult<JsonMap> {
        self.executor.get_json(&data::JOKE, &[]).await
    }

    /// The `fact` field of a random fact.
    pub async fn fact(&self) -> DagpiResult<Option<JsonValue>> {
        self.data_field(&data::FACT, "fact").await
    }

    /// The `response` field of a magic 8-ball answer.
    pub async fn eightball(&self) -> DagpiResult<Option<JsonValue>> {
        self.data_field(&data::EIGHT_BALL, "response").await
    }

    /// The `description` field of a yo mama joke.
    pub async fn yomama(&self) -> DagpiResult<Option<JsonValue>> {
        self.data_field(&data::YOMAMA, "description").await
    }

    pub async fn random_waifu(&self) -> DagpiResult<JsonMap> {
        self.executor.get_json(&data::RANDOM_WAIFU, &[]).await
    }

    /// Look up a waifu by name.
    pub async fn waifu(&self, name: &str) -> DagpiResult<JsonMap> {
        self.executor.get_json(&data::WAIFU_SEARCH, &[name]).await
    }

    pub async fn pickup_line(&self) -> DagpiResult<JsonMap> {
        self.executor.get_json(&data::PICKUP_LINE, &[]).await
    }

    /// A headline plus a `fake` flag telling whether it was made up.
    pub async fn headline(&self) -> DagpiResult<JsonMap> {
        self.executor.get_json(&data::HEADLINE, &[]).await
    }

    /// Guess-the-logo data.
    pub async fn logo(&self) -> DagpiResult<JsonMap> {
        self.executor.get_json(&data::LOGO, &[]).await
    }

    pub async fn flag(&self) -> DagpiResult<JsonMap> {
        self.executor.get_json(&data::FLAG, &[]).await
    }

    pub async fn captcha(&self) -> DagpiResult<JsonMap> {
        self.executor.get_json(&data::CAPTCHA, &[]).await
    }

    pub async fn typeracer(&self) -> DagpiResult<JsonMap> {
        self.executor.get_json(&data::TYPERACER, &[]).await
    }

    // Image endpoints taking more than a single url

    /// Five guys one girl meme; `url` is the girl, `url2` the guys.
    pub async fn five_guys_one_girl(&self, url: &str, url2: &str) -> DagpiResult<Bytes> {
        self.executor
            .get_bytes(&image::FIVE_GUYS_ONE_GIRL, &[url, url2])
            .await
    }

    pub async fn why_are_you_gay(&self, url: &str, url2: &str) -> DagpiResult<Bytes> {
        self.executor
            .get_bytes(&image::WHY_ARE_YOU_GAY, &[url, url2])
            .await
    }

    /// `url` slaps `url2`.
    pub async fn slap(&self, url: &str, url2: &str) -> DagpiResult<Bytes> {
        self.executor.get_bytes(&image::SLAP, &[url, url2]).await
    }

    pub async fn obama(&self, url: &str, url2: &str) -> DagpiResult<Bytes> {
        self.executor.get_bytes(&image::OBAMA, &[url, url2]).await
    }

    /// Overlay a pride flag given by name, matched case-insensitively.
    ///
    /// An unknown flag fails with [`DagpiError::InvalidParameter`] and no
    /// request is sent.
    pub async fn pride(&self, url: &str, flag: &str) -> DagpiResult<Bytes> {
        let flag: PrideFlag = flag.parse()?;
        self.pride_flag(url, flag).await
    }

    pub async fn pride_flag(&self, url: &str, flag: PrideFlag) -> DagpiResult<Bytes> {
        self.executor
            .get_bytes(&image::PRIDE, &[url, flag.as_str()])
            .await
    }

    /// Fake tweet with `url` as the avatar.
    pub async fn tweet(&self, url: &str, username: &str, text: &str) -> DagpiResult<Bytes> {
        self.executor
            .get_bytes(&image::TWEET, &[url, username, text])
            .await
    }

    pub async fn youtube_comment(
        &self,
        url: &str,
        username: &str,
        text: &str,
        dark: bool,
    ) -> DagpiResult<Bytes> {
        self.executor
            .get_bytes(&image::YOUTUBE_COMMENT, &[url, username, text, bool_param(dark)])
            .await
    }

    pub async fn discord(
        &self,
        url: &str,
        username: &str,
        text: &str,
        dark: bool,
    ) -> DagpiResult<Bytes> {
        self.executor
            .get_bytes(&image::DISCORD, &[url, username, text, bool_param(dark)])
            .await
    }

    pub async fn retromeme(
        &self,
        url: &str,
        top_text: &str,
        bottom_text: &str,
    ) -> DagpiResult<Bytes> {
        self.executor
            .get_bytes(&image::RETROMEME, &[url, top_text, bottom_text])
            .await
    }

    /// Black motivational poster with top and bottom text.
    pub async fn motivational(
        &self,
        url: &str,
        top_text: &str,
        bottom_text: &str,
    ) -> DagpiResult<Bytes> {
        self.executor
            .get_bytes(&image::MOTIVATIONAL, &[url, top_text, bottom_text])
            .await
    }

    pub async fn modern_meme(&self, url: &str, text: &str) -> DagpiResult<Bytes> {
        self.executor
            .get_bytes(&image::MODERNMEME, &[url, text])
            .await
    }
}

/// Single-url image endpoints
macro_rules! url_image_endpoints {
    ($($(#[$meta:meta])* $method:ident => $endpoint:ident;)*) => {
        impl Client {
            $(
                $(#[$meta])*
                pub async fn $method(&self, url: &str) -> DagpiResult<Bytes> {
                    self.executor.get_bytes(&image::$endpoint, &[url]).await
                }
            )*
        }
    };
}

url_image_endpoints! {
    /// Pixelate an image.
    pixelate => PIXEL;
    /// Mirror an image along the y-axis.
    mirror => MIRROR;
    /// Flip an image upside down.
    flip_image => FLIP;
    /// Palette of the colors present in an image.
    colors => COLORS;
    america => AMERICA;
    communism => COMMUNISM;
    /// Triggered gif.
    triggered => TRIGGERED;
    /// Animation that stretches an image.
    expand_image => EXPAND;
    /// GTA V "wasted" screen.
    wasted => WASTED;
    sketch => SKETCH;
    spin_image => SPIN;
    petpet => PETPET;
    bonk => BONK;
    bomb => BOMB;
    /// Make the image wiggle.
    shake => SHAKE;
    invert => INVERT;
    /// Sobel edge detection.
    sobel => SOBEL;
    /// Histogram of oriented gradients.
    hog => HOG;
    triangle => TRIANGLE;
    blur => BLUR;
    /// RGB histogram of the image's colors.
    rgb => RGB;
    angel => ANGEL;
    satan => SATAN;
    /// Windows "delete" dialog meme.
    delete => DELETE;
    fedora => FEDORA;
    hitler => HITLER;
    /// Every group of pixels becomes a lego brick.
    lego => LEGO;
    /// Wanted poster.
    wanted => WANTED;
    stringify => STRINGIFY;
    burn => BURN;
    earth => EARTH;
    freeze => FREEZE;
    ground => GROUND;
    /// Roman mosaic. The route keeps the API's spelling.
    mosiac => MOSIAC;
    sithlord => SITH;
    jail => JAIL;
    shatter => SHATTER;
    trash => TRASH;
    deepfry => DEEPFRY;
    ascii => ASCII;
    charcoal => CHARCOAL;
    posterize => POSTER;
    sepia => SEPIA;
    swirl => SWIRL;
    paint => PAINT;
    night => NIGHT;
    rainbow => RAINBOW;
    /// Liquid-rescale distortion.
    magik => MAGIK;
    elmo => ELMO;
    tv_static => TV_STATIC;
    rain => RAIN;
    glitch => GLITCH;
    glitch_static => GLITCH_STATIC;
    /// Album cover.
    album => ALBUM;
}

fn bool_param(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

fn lookup(kind: EndpointKind, name: &str) -> DagpiResult<&'static Endpoint> {
    endpoints::find(kind, name).ok_or_else(|| {
        DagpiError::invalid_parameter(
            "endpoint",
            name,
            format!("no {} endpoint with this name", kind),
        )
    })
}

/// Arrange named parameters in the endpoint's wire order, rejecting
/// missing, unknown and repeated names.
fn ordered_values<'a>(
    endpoint: &Endpoint,
    params: &[(&str, &'a str)],
) -> DagpiResult<Vec<&'a str>> {
    for (i, (name, value)) in params.iter().enumerate() {
        if params[..i].iter().any(|(seen, _)| seen == name) {
            return Err(DagpiError::invalid_parameter(
                *name,
                *value,
                format!("given more than once for '{}'", endpoint.name),
            ));
        }
    }

    if let Some((unknown, value)) = params
        .iter()
        .find(|(name, _)| !endpoint.params.iter().any(|known| known == name))
    {
        return Err(DagpiError::invalid_parameter(
            *unknown,
            *value,
            format!("'{}' does not take this parameter", endpoint.name),
        ));
    }

    endpoint
        .params
        .iter()
        .map(|expected| {
            params
                .iter()
                .find(|(name, _)| name == expected)
                .map(|(_, value)| *value)
                .ok_or_else(|| {
                    DagpiError::invalid_parameter(
                        *expected,
                        "",
                        format!("required by '{}'", endpoint.name),
                    )
                })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordered_values_follows_wire_order() {
        let values = ordered_values(
            &image::TWEET,
            &[("text", "hi"), ("url", "u"), ("username", "ferris")],
        )
        .unwrap();
        assert_eq!(values, vec!["u", "ferris", "hi"]);
    }

    #[test]
    fn test_ordered_values_rejects_repeated_name() {
        match ordered_values(&image::BLUR, &[("url", "a"), ("url", "b")]) {
            Err(DagpiError::InvalidParameter { name, value, .. }) => {
                assert_eq!(name, "url");
                assert_eq!(value, "b");
            }
            other => panic!("expected InvalidParameter, got {:?}", other),
        }
    }

    #[test]
    fn test_ordered_values_rejects_unknown_and_missing() {
        assert!(ordered_values(&image::BLUR, &[("url", "a"), ("flag", "gay")]).is_err());
        assert!(ordered_values(&image::SLAP, &[("url", "a")]).is_err());
    }
}
