// Build-Script: Wird vor dem Kompilieren ausgeführt
// Konfiguriert den Linker für ESP32-C6 Embedded Rust

fn main() {
    // Lade .env file für die Empfänger-MAC
    // Fehlt die Datei, wird per Broadcast gesendet
    if let Err(e) = dotenvy::dotenv() {
        println!("cargo:warning=.env nicht gefunden ({e}), sende per Broadcast");
    }

    // Empfänger-MAC an den Rust-Compiler weitergeben (option_env! in config.rs)
    if let Ok(peer) = std::env::var("REMOTE_PEER_MAC") {
        println!("cargo:rustc-env=REMOTE_PEER_MAC={}", peer);
    }
    println!("cargo:rerun-if-env-changed=REMOTE_PEER_MAC");
    println!("cargo:rerun-if-changed=.env");

    // Registriere hilfsbereiten Error-Handler für Linker-Fehler
    linker_be_nice();

    // defmt.x - Symbole für defmt's binäres Log-Format
    println!("cargo:rustc-link-arg=-Tdefmt.x");

    // linkall.x - ESP32 Memory-Layout, muss als LETZTES kommen
    println!("cargo:rustc-link-arg=-Tlinkall.x");
}

// Error-Handler: Zeigt Tipps bei Linker-Fehlern
// Wird vom Linker als "--error-handling-script" aufgerufen
fn linker_be_nice() {
    let args: Vec<String> = std::env::args().collect();

    if args.len() > 2 {
        let kind = &args[1]; // Fehler-Typ (z.B. "undefined-symbol")
        let what = &args[2]; // Symbol-Name

        if kind != "undefined-symbol" {
            std::process::exit(1);
        }

        let hint = match what.as_str() {
            s if s.starts_with("_defmt_") => {
                Some("`defmt` not found - is `defmt.x` passed to the linker?")
            }
            "_stack_start" => Some("Is the linker script `linkall.x` missing?"),
            s if s.starts_with("esp_rtos_") => {
                Some("`esp-radio` has no scheduler - call `esp_rtos::start` before `esp_radio::init`.")
            }
            "free" | "malloc" | "calloc" | "malloc_internal" | "free_internal" => {
                Some("Did you forget the `esp-alloc` dependency?")
            }
            _ => None,
        };

        if let Some(hint) = hint {
            eprintln!();
            eprintln!("💡 {hint}");
            eprintln!();
        }
        std::process::exit(0);
    }

    if let Ok(exe) = std::env::current_exe() {
        println!(
            "cargo:rustc-link-arg=--error-handling-script={}",
            exe.display()
        );
    }
}
