use serde::Deserialize;

/// Default chart palette, cycled over series and slices that carry no
/// explicit color.
pub const DEFAULT_PALETTE: [&str; 8] = [
    "#0088FE", "#00C49F", "#FFBB28", "#FF8042", "#8884d8", "#82ca9d", "#ffc658", "#ff7300",
];

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub listen: String,
    #[serde(default)]
    pub source: SourceConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SourceConfig {
    /// "static" serves the built-in catalog; "upstream" proxies a remote
    /// dashboard service.
    #[serde(default = "default_source_kind")]
    pub kind: String,
    pub upstream_url: Option<String>,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            kind: default_source_kind(),
            upstream_url: None,
        }
    }
}

fn default_source_kind() -> String {
    "static".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct PaletteConfig {
    #[serde(default)]
    pub colors: Vec<String>,
}

pub fn load_server_config() -> anyhow::Result<ServerConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/server").required(false))
        .set_default("listen", "0.0.0.0:8080")?
        .build()?;

    Ok(settings.try_deserialize()?)
}

/// Load the palette, falling back to the built-in cycle when no file
/// overrides it.
pub fn load_palette_config() -> anyhow::Result<PaletteConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/palette").required(false))
        .build()?;

    let mut palette: PaletteConfig = settings.try_deserialize()?;
    if palette.colors.is_empty() {
        palette.colors = default_palette();
    }
    Ok(palette)
}

pub fn default_palette() -> Vec<String> {
    DEFAULT_PALETTE.iter().map(|c| c.to_string()).collect()
}
