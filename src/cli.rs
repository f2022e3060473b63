//! Command line arguments.

use clap::Parser;
use std::path::PathBuf;

/// Provision Azure resource groups and their admin role assignments from YAML.
#[derive(Parser, Debug)]
#[command(name = "azure-rg-provision", version)]
pub struct Args {
    /// Team config file, e.g. rgConfig_<team>.yml
    pub config_file: PathBuf,

    /// Only reconcile this realm (all realms when omitted)
    pub realm: Option<String>,

    /// Common config file [default: rgConfig_common.yml next to the team config]
    #[arg(long, env = "RG_COMMON_CONFIG")]
    pub common_config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn test_config_and_realm() {
        let args = Args::try_parse_from(["azure-rg-provision", "rgConfig_team.yml", "dev"]).unwrap();
        assert_eq!(args.config_file, PathBuf::from("rgConfig_team.yml"));
        assert_eq!(args.realm.as_deref(), Some("dev"));
        assert!(!args.no_color);
    }

    #[test]
    fn test_realm_optional() {
        let args = Args::try_parse_from([
            "azure-rg-provision",
            "rgConfig_team.yml",
            "--common-config",
            "/etc/common.yml",
        ])
        .unwrap();
        assert!(args.realm.is_none());
        assert_eq!(args.common_config, Some(PathBuf::from("/etc/common.yml")));
    }

    #[test]
    fn test_missing_config_is_usage_error() {
        let err = Args::try_parse_from(["azure-rg-provision"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_extra_argument_is_usage_error() {
        let err = Args::try_parse_from(["azure-rg-provision", "a.yml", "dev", "prod"]).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }
}
