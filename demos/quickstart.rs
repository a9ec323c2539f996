use chrono::Utc;
use pom::{format_minute, MoonClock, Render, SearchConfig, Target};

fn main() -> pom::Result<()> {
    let clock = MoonClock::new()?;
    let now = Utc::now();

    println!("{}", clock.classify(&now));
    println!("{}", clock.classify(&now).render(Render::Bar));

    let terms = pom::terms(clock.days_since_epoch(&now));
    println!("elongation: {}", terms.elongation());

    let config = SearchConfig::default();
    let full = clock.next_phase(Target::Full, &now, &config)?;
    let new = clock.next_phase(Target::New, &now, &config)?;
    println!("next full: {}", format_minute(&full));
    println!("next new:  {}", format_minute(&new));
    Ok(())
}
