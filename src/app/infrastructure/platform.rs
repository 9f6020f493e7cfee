/// Report whether the desktop prefers a dark color scheme.
///
/// Falls back to light when the platform gives no answer.
pub fn detect_system_dark_mode() -> bool {
    platform_prefers_dark()
}

#[cfg(target_os = "windows")]
fn platform_prefers_dark() -> bool {
    windows_prefers_dark().unwrap_or(false)
}

#[cfg(target_os = "linux")]
fn platform_prefers_dark() -> bool {
    gnome_prefers_dark()
}

#[cfg(target_os = "macos")]
fn platform_prefers_dark() -> bool {
    macos_prefers_dark()
}

#[cfg(not(any(target_os = "windows", target_os = "linux", target_os = "macos")))]
fn platform_prefers_dark() -> bool {
    false
}

#[cfg(target_os = "windows")]
fn windows_prefers_dark() -> Option<bool> {
    use winreg::RegKey;
    use winreg::enums::HKEY_CURRENT_USER;

    let key = RegKey::predef(HKEY_CURRENT_USER)
        .open_subkey("Software\\Microsoft\\Windows\\CurrentVersion\\Themes\\Personalize")
        .ok()?;
    // AppsUseLightTheme: 0 = dark, 1 = light
    let value: u32 = key.get_value("AppsUseLightTheme").ok()?;
    Some(value == 0)
}

#[cfg(target_os = "linux")]
fn gnome_prefers_dark() -> bool {
    let probes: [(&str, &str); 2] = [("gtk-theme", "dark"), ("color-scheme", "prefer-dark")];
    probes.iter().any(|(key, needle)| {
        gsettings_interface(key)
            .map(|value| value.to_lowercase().contains(needle))
            .unwrap_or(false)
    })
}

#[cfg(target_os = "linux")]
fn gsettings_interface(key: &str) -> Option<String> {
    let output = std::process::Command::new("gsettings")
        .args(["get", "org.gnome.desktop.interface", key])
        .output()
        .ok()?;
    Some(String::from_utf8_lossy(&output.stdout).into_owned())
}

#[cfg(target_os = "macos")]
fn macos_prefers_dark() -> bool {
    // Key is absent (non-zero exit) in light mode
    match std::process::Command::new("defaults")
        .args(["read", "-g", "AppleInterfaceStyle"])
        .output()
    {
        Ok(output) if output.status.success() => {
            String::from_utf8_lossy(&output.stdout).to_lowercase().contains("dark")
        }
        _ => false,
    }
}
