//! Apply CLI overrides on top of a loaded config.

use crate::domain::Config;
use std::path::PathBuf;

#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub template_dir: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
    pub language: Option<String>,
    pub lenient_names: bool,
    pub no_meta: bool,
}

pub fn merge_cli_with_config(mut config: Config, overrides: CliOverrides) -> Config {
    if let Some(dir) = overrides.template_dir {
        config.template_dir = dir;
    }
    if let Some(dir) = overrides.output_dir {
        config.output_dir = dir;
    }
    if let Some(language) = overrides.language {
        config.language = Some(language);
    }
    // Flags can only relax the file's settings.
    if overrides.lenient_names {
        config.strict_names = false;
    }
    if overrides.no_meta {
        config.write_meta = false;
    }
    config
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_values_take_precedence() {
        let base = Config { language: Some("pt-BR".to_string()), ..Config::default() };
        let merged = merge_cli_with_config(
            base,
            CliOverrides {
                output_dir: Some(PathBuf::from("dist")),
                language: Some("es-ES".to_string()),
                ..CliOverrides::default()
            },
        );
        assert_eq!(merged.output_dir, PathBuf::from("dist"));
        assert_eq!(merged.language.as_deref(), Some("es-ES"));
        assert_eq!(merged.template_dir, Config::default().template_dir);
    }

    #[test]
    fn absent_flags_keep_file_settings() {
        let base = Config { strict_names: false, write_meta: false, ..Config::default() };
        let merged = merge_cli_with_config(base, CliOverrides::default());
        assert!(!merged.strict_names);
        assert!(!merged.write_meta);

        let merged = merge_cli_with_config(
            Config::default(),
            CliOverrides { lenient_names: true, no_meta: true, ..CliOverrides::default() },
        );
        assert!(!merged.strict_names);
        assert!(!merged.write_meta);
    }
}
