/// Probe a picker configuration from the command line.
///
/// Usage: `huewheel-probe [config.json] <h> <s> <v>`
///
/// Prints the handle position for the color, the channels recovered from
/// that position, and the gradient stops when the shape has them.
#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use huewheel::{Hsv, PickerConfig, Point};

    const USAGE: &str = "usage: huewheel-probe [config.json] <h> <s> <v>";

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (config_path, channels) = match args.len() {
        3 => (None, &args[..]),
        4 => (Some(&args[0]), &args[1..]),
        _ => {
            eprintln!("{USAGE}");
            std::process::exit(2);
        }
    };

    let parsed: Result<Vec<f64>, _> = channels.iter().map(|arg| arg.parse::<f64>()).collect();
    let color = match parsed.as_deref() {
        Ok(&[h, s, v]) => Hsv::new(h, s, v),
        _ => {
            eprintln!("invalid color channels {channels:?}\n{USAGE}");
            std::process::exit(2);
        }
    };

    let config = match config_path {
        Some(path) => match PickerConfig::load(std::path::Path::new(path)) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Failed to load {path}: {e}");
                std::process::exit(1);
            }
        },
        None => PickerConfig::load_from_default_path().unwrap_or_default(),
    };

    env_logger::Builder::new()
        .filter_level(config.log_level.to_level_filter())
        .parse_default_env()
        .init();

    let picker = config.picker();
    let handle = picker.handle_position(&color);
    let input = picker.input(handle.x, handle.y, Point::ORIGIN);
    let report = serde_json::json!({
        "shape": config.shape,
        "color": color,
        "handle": handle,
        "input": input,
        "recovered": input.apply_to(color),
        "gradients": picker.gradients(&color),
    });

    match serde_json::to_string_pretty(&report) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            eprintln!("Failed to serialize report: {e}");
            std::process::exit(1);
        }
    }
}

// WASM hosts use the library directly
#[cfg(target_arch = "wasm32")]
fn main() {}
