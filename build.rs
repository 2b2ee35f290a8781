#![allow(clippy::indexing_slicing, clippy::exit, clippy::unwrap_used)]
fn main() {
    if std::env::args().len() > 1 {
        explain_linker_error();
    }

    // Host builds (tests, docs) link normally; only the ESP32-S3 firmware
    // needs the defmt and esp-hal linker scripts.
    if std::env::var_os("CARGO_FEATURE_BOARD").is_none() {
        return;
    }

    if std::env::var("PROFILE").unwrap_or_default() == "release" {
        println!("cargo:rustc-env=DEFMT_LOG=off");
    }

    println!(
        "cargo:rustc-link-arg=-Wl,--error-handling-script={}",
        std::env::current_exe().unwrap().display()
    );
    println!("cargo:rustc-link-arg=-Tdefmt.x");
    println!("cargo:rustc-link-arg=-Tlinkall.x");
}

/// Invoked by the linker through `--error-handling-script`.
fn explain_linker_error() -> ! {
    let args: Vec<String> = std::env::args().collect();
    let kind = &args[1];
    let what = args.get(2).map(String::as_str).unwrap_or_default();

    match kind.as_str() {
        "undefined-symbol" => match what {
            "_defmt_timestamp" => {
                eprintln!();
                eprintln!(
                    "💡 `defmt` not found - make sure `defmt.x` is added as a linker script and you have included `use esp_println as _;`"
                );
                eprintln!();
            }
            "_stack_start" => {
                eprintln!();
                eprintln!("💡 Is the linker script `linkall.x` missing?");
                eprintln!();
            }
            "esp_rtos_initialized" | "esp_rtos_yield_task" | "esp_rtos_task_create" => {
                eprintln!();
                eprintln!(
                    "💡 No scheduler found. Make sure `esp_rtos::start` runs before the game task is spawned."
                );
                eprintln!();
            }
            _ => (),
        },
        _ => {
            std::process::exit(1);
        }
    }

    std::process::exit(0);
}
