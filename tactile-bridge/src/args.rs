//! Command line: `tactile-bridge [--config <path>] [script]`.

use std::path::PathBuf;

use anyhow::{Result, bail};

#[derive(Debug, Default, PartialEq)]
pub struct Args {
    pub config: Option<PathBuf>,
    pub script: Option<PathBuf>,
}

impl Args {
    pub fn parse<I>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut out = Args::default();
        let mut iter = args.into_iter();
        while let Some(arg) = iter.next() {
            match arg.as_str() {
                "--config" | "-c" => {
                    let Some(path) = iter.next() else {
                        bail!("--config needs a path");
                    };
                    out.config = Some(PathBuf::from(path));
                }
                flag if flag.starts_with('-') => bail!("unknown flag: {}", flag),
                _ if out.script.is_some() => bail!("only one script may be given"),
                other => out.script = Some(PathBuf::from(other)),
            }
        }
        Ok(out)
    }
}
