//! Default player names

use crate::rng::RandomSource;

pub static MOUSE_NAMES: [&str; 20] = [
    "Jerry", "Mickey", "Stuart", "Chester", "Maxie", "Rusty", "Whiskers", "Squeaky", "Nibble",
    "Pip", "Tiny", "Scurry", "Dusty", "Buttons", "Cheddar", "Mozzie", "Peanut", "Sniffles",
    "Skippy", "Pipkin",
];

/// Pick a name for a player who has not chosen one
pub fn random_player_name<R: RandomSource>(rng: &mut R) -> &'static str {
    rng.choose(&MOUSE_NAMES).copied().unwrap_or("Jerry")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::GameRng;

    #[test]
    fn test_random_name_from_list() {
        let mut rng = GameRng::new(77);
        for _ in 0..50 {
            assert!(MOUSE_NAMES.contains(&random_player_name(&mut rng)));
        }
    }
}
