use std::path::Path;

use serde::{de::DeserializeOwned, de::Error as _, Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::modules::*;

#[derive(Serialize, Deserialize, Debug)]
pub struct RawConfig {
    #[serde(default)]
    pub pipeline_modules: Vec<toml::Table>
}

pub struct PipelineConfig {
    pub pipeline_modules: Vec<Box<dyn PipelineModule>>
}

fn from_toml<T>(module: toml::Table) -> Result<Box<dyn PipelineModule>>
where
    T: DeserializeOwned + PipelineModule + 'static,
{
    let cfg: T = module.try_into()?;
    Ok(Box::new(cfg))
}

fn module_from_toml(module: toml::Table) -> Result<Box<dyn PipelineModule>> {
    let name = match module.get("name").and_then(toml::Value::as_str) {
        Some(name) => name.to_string(),
        None => return Err(toml::de::Error::custom("pipeline module without a `name`").into()),
    };

    let pipeline_module: Box<dyn PipelineModule> = match name.as_str() {
        "ReflectVertical" =>    from_toml::<ReflectVertical>(module)?,
        "ReflectHorizontal" =>  from_toml::<ReflectHorizontal>(module)?,
        "Rotate" =>             from_toml::<Rotate>(module)?,
        "Grayscale" =>          from_toml::<Grayscale>(module)?,
        "Monochrome" =>         from_toml::<Monochrome>(module)?,
        "FilterChannels" => {
            let raw: RawFilterChannels = module.try_into()?;
            Box::new(FilterChannels::try_from(raw)?)
        }
        v => return Err(Error::UnknownModule(v.to_string())),
    };
    Ok(pipeline_module)
}

/// Parses a pipeline config from TOML text.
pub fn parse_config(data: &str) -> Result<PipelineConfig> {
    let raw: RawConfig = toml::from_str(data)?;

    let pipeline_modules = raw
        .pipeline_modules
        .into_iter()
        .map(module_from_toml)
        .collect::<Result<Vec<_>>>()?;

    Ok(PipelineConfig { pipeline_modules })
}

pub fn load_config(config_path: impl AsRef<Path>) -> Result<PipelineConfig> {
    let data = std::fs::read_to_string(config_path)?;
    parse_config(&data)
}
