use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CliError {
    #[error("Unrecognized key {0}")]
    UnrecognizedKey(String),
    #[error("Missing value for {0}")]
    MissingValue(String),
    #[error("Invalid value \"{value}\" for {key}")]
    InvalidValue { key: String, value: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct CliOptions {
    pub use_multi_thread: bool,
    pub threads: Option<usize>,
    pub grid: usize,
    pub spacing: f32,
    pub frames: usize,
    pub exact: bool,
    pub show_help: bool,
}

impl Default for CliOptions {
    fn default() -> Self {
        Self {
            use_multi_thread: true,
            threads: None,
            grid: 32,
            spacing: 3.0,
            frames: 360,
            exact: false,
            show_help: false,
        }
    }
}

impl CliOptions {
    pub fn message() -> &'static str {
        r#"
        --use_multi_thread | --use_single_thread (the last one wins)
        --threads <num_threads>
        --grid <instances_per_side>
        --spacing <distance>
        --frames <num_frames>
        --exact
        --help
        "#
    }
}

fn parse_value<T: FromStr>(key: &str, value: Option<String>) -> Result<T, CliError> {
    let value = value.ok_or_else(|| CliError::MissingValue(key.to_string()))?;
    value.parse().map_err(|_| CliError::InvalidValue {
        key: key.to_string(),
        value,
    })
}

fn invalid(key: &str, value: impl ToString) -> CliError {
    CliError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
    }
}

pub fn parse_args(args: Vec<String>) -> Result<CliOptions, CliError> {
    // Keys are applied in command-line order, so a later key overrides an earlier one.
    let mut pairs: Vec<(String, Option<String>)> = Vec::new();
    let mut args = args.into_iter().rev().collect::<Vec<_>>();
    args.pop(); // Removes args[0]

    while let Some(key) = args.pop() {
        if !key.starts_with('-') {
            return Err(CliError::UnrecognizedKey(key));
        }
        match args.last() {
            None => {
                pairs.push((key, None));
            }
            Some(value) => {
                if value.starts_with('-') {
                    pairs.push((key, None));
                } else {
                    let value = args.pop();
                    pairs.push((key, value));
                }
            }
        }
    }
    let mut options = CliOptions::default();
    for (k, v) in pairs.into_iter() {
        match k.as_str() {
            "--use_multi_thread" => options.use_multi_thread = true,
            "--use_single_thread" => options.use_multi_thread = false,
            "--threads" => {
                let n: usize = parse_value(&k, v)?;
                if n == 0 {
                    return Err(invalid(&k, n));
                }
                options.threads = Some(n);
            }
            "--grid" => options.grid = parse_value(&k, v)?,
            "--spacing" => {
                let spacing: f32 = parse_value(&k, v)?;
                if !(spacing > 0.0) {
                    return Err(invalid(&k, spacing));
                }
                options.spacing = spacing;
            }
            "--frames" => {
                let frames: usize = parse_value(&k, v)?;
                if frames == 0 {
                    return Err(invalid(&k, frames));
                }
                options.frames = frames;
            }
            "--exact" => options.exact = true,
            "--help" => options.show_help = true,
            _ => return Err(CliError::UnrecognizedKey(k.clone())),
        }
    }
    Ok(options)
}
