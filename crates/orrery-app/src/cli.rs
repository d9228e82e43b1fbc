use std::path::PathBuf;

use clap::Parser;
use orrery_config::schema::SegmentsConfig;
use orrery_config::MAX_SPHERE_SEGMENTS;

/// Orrery: a lit sphere with a wireframe light orbiting around it.
#[derive(Parser, Debug)]
#[command(name = "orrery", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log level or filter directive (e.g. debug, orrery_renderer=trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Light sphere tessellation as <x>x<y>, e.g. 32x16.
    #[arg(long, value_parser = parse_segments)]
    pub light_segments: Option<SegmentsConfig>,

    /// Print the effective config as JSON and exit.
    #[arg(long)]
    pub print_config: bool,
}

pub fn parse() -> Args {
    Args::parse()
}

/// Parse `<x>x<y>` into segment counts, each in `1..=MAX_SPHERE_SEGMENTS`.
fn parse_segments(s: &str) -> Result<SegmentsConfig, String> {
    let (x, y) = s
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected <x>x<y>, got '{s}'"))?;
    let x = parse_count(x)?;
    let y = parse_count(y)?;
    Ok(SegmentsConfig { x, y })
}

fn parse_count(s: &str) -> Result<u32, String> {
    let n: u32 = s
        .trim()
        .parse()
        .map_err(|e| format!("invalid segment count '{s}': {e}"))?;
    if n == 0 || n > MAX_SPHERE_SEGMENTS {
        return Err(format!(
            "segment count {n} out of range (1-{MAX_SPHERE_SEGMENTS})"
        ));
    }
    Ok(n)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_segments() {
        assert_eq!(parse_segments("32x16"), Ok(SegmentsConfig { x: 32, y: 16 }));
        assert_eq!(parse_segments("4X2"), Ok(SegmentsConfig { x: 4, y: 2 }));
    }

    #[test]
    fn rejects_malformed_segments() {
        assert!(parse_segments("32").is_err());
        assert!(parse_segments("axb").is_err());
        assert!(parse_segments("0x8").is_err());
        assert!(parse_segments("8x5000").is_err());
    }

    #[test]
    fn args_parse_all_flags() {
        let args = Args::try_parse_from([
            "orrery",
            "--config",
            "/tmp/orrery.toml",
            "--log-level",
            "debug",
            "--light-segments",
            "10x5",
            "--print-config",
        ])
        .unwrap();
        assert_eq!(args.config, Some(PathBuf::from("/tmp/orrery.toml")));
        assert_eq!(args.log_level.as_deref(), Some("debug"));
        assert_eq!(args.light_segments, Some(SegmentsConfig { x: 10, y: 5 }));
        assert!(args.print_config);
    }

    #[test]
    fn args_default_to_none() {
        let args = Args::try_parse_from(["orrery"]).unwrap();
        assert!(args.config.is_none());
        assert!(args.light_segments.is_none());
        assert!(!args.print_config);
    }

    #[test]
    fn bad_segments_flag_is_rejected() {
        assert!(Args::try_parse_from(["orrery", "--light-segments", "0x0"]).is_err());
    }
}
