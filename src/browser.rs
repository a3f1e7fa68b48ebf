use std::process::Command;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    MacOs,
    Linux,
    Windows,
}

impl Platform {
    pub fn from_os(os: &str) -> Option<Self> {
        match os {
            "macos" => Some(Platform::MacOs),
            "linux" => Some(Platform::Linux),
            "windows" => Some(Platform::Windows),
            _ => None,
        }
    }

    fn launcher(self) -> (&'static str, &'static [&'static str]) {
        match self {
            Platform::MacOs => ("open", &[]),
            Platform::Linux => ("xdg-open", &[]),
            Platform::Windows => ("rundll32", &["url.dll,FileProtocolHandler"]),
        }
    }
}

/// Fire-and-forget browser launch. Every failure path is advisory: the
/// containers are already up, so we only print how to get there manually.
pub fn open_browser(os: &str, url: &str) {
    let Some(platform) = Platform::from_os(os) else {
        println!("Unsupported operating system: {os}");
        println!("Please open {url} manually.");
        return;
    };

    let (bin, args) = platform.launcher();
    if let Err(err) = Command::new(bin).args(args).arg(url).spawn() {
        println!("Error opening browser: {err}");
        println!("Please navigate to {url} manually.");
    }
}
