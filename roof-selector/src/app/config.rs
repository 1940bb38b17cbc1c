use std::io::Read;

use host_core::string_error::ErrorStringExt;

/// Host-side configuration: where the selector panel is initially
/// pointed. Read from "~/.roof-selector", one `key=value` per line.
#[derive(Debug)]
pub struct Config {
    pub lat: f64,
    pub lon: f64,
}

impl Default for Config {
    fn default() -> Self {
        // Approximate center of Ethiopia, the original deployment region.
        let lat = 9.0;
        let lon = 38.0;

        Self { lat, lon }
    }
}

impl Config {
    pub fn from_config_file() -> Result<Self, String> {
        #[allow(deprecated)]
        let Some(home) = std::env::home_dir() else {
            return Err("could not determine home directory to load config file".into());
        };
        let config_raw = {
            let path = home.join(".roof-selector");
            let mut file = std::fs::File::open(path).err_to_string("could not open config file")?;
            let mut buf = String::new();
            file.read_to_string(&mut buf)
                .err_to_string("could not load config file")?;
            buf
        };
        Ok(Self::parse(&config_raw))
    }

    fn parse(config_raw: &str) -> Self {
        let mut config = Self::default();
        for line in config_raw.lines() {
            // Lines starting with "#" are considered comments.
            if line.starts_with("#") {
                continue;
            }
            let mut iter = line.split("=");
            let key = iter.next();
            let val = iter.next();
            match (key, val) {
                (Some("lat"), Some(lat_str)) => {
                    if let Ok(lat) = lat_str.parse::<f64>() {
                        config.lat = lat;
                    } else {
                        log::warn!("could not parse 'lat' as number")
                    }
                }
                (Some("lon"), Some(lon_str)) => {
                    if let Ok(lon) = lon_str.parse::<f64>() {
                        config.lon = lon;
                    } else {
                        log::warn!("could not parse 'lon' as number")
                    }
                }
                _ => continue,
            }
        }
        config
    }
}
