/// Startup banner, printed unless quiet mode is on.
const BANNER: &str = r#"
 _       __
| |     / /___ ___  ______________ _____
| | /| / / __ `/ / / / ___/ ___/ __ `/ __ \
| |/ |/ / /_/ / /_/ (__  ) /__/ /_/ / / / /
|__/|__/\__,_/\__, /____/\___/\__,_/_/ /_/
             /____/
"#;

pub fn print_banner() {
    println!("{BANNER}");
    println!("           Passive Recon & URL Analyzer\n");
}
