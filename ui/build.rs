use chrono::Utc;

fn main() {
    // ISO 8601 UTC, shown in the page footer
    let now = Utc::now();
    let build_timestamp_iso = now.to_rfc3339_opts(chrono::SecondsFormat::Secs, true);

    println!(
        "cargo:rustc-env=BUILD_TIMESTAMP_ISO={}",
        build_timestamp_iso
    );
    println!("cargo:rerun-if-env-changed=WIFIMAP_API_URL");
}
