//! Launch options for the viewer: which gallery seed and maze size to start with.

use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeedChoice {
    Cli(u64),
    Generated(u64),
}

impl SeedChoice {
    pub fn value(self) -> u64 {
        match self {
            Self::Cli(seed) | Self::Generated(seed) => seed,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LaunchOptions {
    pub seed: SeedChoice,
    pub size: Option<usize>,
}

/// Accepts `--seed N`, `--seed=N`, `--size N`, and `--size=N`; other
/// arguments are ignored. Each flag may appear once.
pub fn parse_launch_options(args: &[String], generated_seed: u64) -> Result<LaunchOptions, String> {
    let mut seed = None;
    let mut size = None;
    let mut index = 1usize;

    while index < args.len() {
        let argument = args[index].as_str();
        let (flag, inline_value) = match argument.split_once('=') {
            Some((flag, value)) => (flag, Some(value)),
            None => (argument, None),
        };
        if flag != "--seed" && flag != "--size" {
            index += 1;
            continue;
        }

        let value = match inline_value {
            Some(value) => value,
            None => {
                index += 1;
                args.get(index)
                    .map(String::as_str)
                    .ok_or_else(|| format!("missing value for {flag}"))?
            }
        };
        index += 1;

        if flag == "--seed" {
            if seed.is_some() {
                return Err("seed provided more than once".to_string());
            }
            seed = Some(parse_number::<u64>(flag, value)?);
        } else {
            if size.is_some() {
                return Err("size provided more than once".to_string());
            }
            let parsed = parse_number::<usize>(flag, value)?;
            if parsed == 0 {
                return Err("size must be at least 1".to_string());
            }
            size = Some(parsed);
        }
    }

    Ok(LaunchOptions {
        seed: match seed {
            Some(seed) => SeedChoice::Cli(seed),
            None => SeedChoice::Generated(generated_seed),
        },
        size,
    })
}

fn parse_number<T: FromStr>(flag: &str, raw_value: &str) -> Result<T, String> {
    raw_value.parse::<T>().map_err(|_| format!("{flag} value '{raw_value}' must be a number"))
}
