//! Decorative icons drawn beside a maze's entrance and exit.

use rand_chacha::rand_core::Rng;
use serde::Serialize;

use crate::render::Rendering;
use crate::rng::uniform_below;

/// Each animal waits at the entrance; one of its foods waits at the exit.
pub const IMAGE_PAIRS: &[(&str, &[&str])] = &[
    ("giraffe", &["leaves", "leaves2"]),
    ("deer", &["leaves", "leaves2", "grass"]),
    ("rabbit", &["carrot"]),
    ("penguin", &["trout"]),
    ("snail", &["leaves2"]),
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Artwork {
    pub left: &'static str,
    pub right: &'static str,
}

pub fn choose_artwork<R: Rng + ?Sized>(rng: &mut R) -> Artwork {
    let (left, foods) = IMAGE_PAIRS[uniform_below(rng, IMAGE_PAIRS.len())];
    let right = foods[uniform_below(rng, foods.len())];
    Artwork { left, right }
}

/// Square box an icon is drawn into, top-left corner first.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct IconBox {
    pub x: f64,
    pub y: f64,
    pub size: f64,
}

/// The left icon sits outside the entrance, the right icon just past the
/// exit, each vertically centred on its opening.
pub fn place_icons(rendering: &Rendering, size: f64) -> (IconBox, IconBox) {
    let start = rendering.start_point;
    let end = rendering.end_point;
    (
        IconBox { x: start.x - size, y: start.y - size / 2.0, size },
        IconBox { x: end.x, y: end.y - size / 2.0, size },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::seeded;
    use crate::types::Point;

    #[test]
    fn chosen_food_belongs_to_the_chosen_animal() {
        let mut rng = seeded(31);
        for _ in 0..100 {
            let artwork = choose_artwork(&mut rng);
            let (_, foods) = IMAGE_PAIRS
                .iter()
                .find(|(animal, _)| *animal == artwork.left)
                .expect("animal comes from the table");
            assert!(foods.contains(&artwork.right));
        }
    }

    #[test]
    fn every_animal_shows_up_eventually() {
        let mut rng = seeded(4);
        let picks: Vec<Artwork> = (0..200).map(|_| choose_artwork(&mut rng)).collect();
        for (animal, _) in IMAGE_PAIRS {
            assert!(picks.iter().any(|artwork| artwork.left == *animal), "{animal} never chosen");
        }
    }

    #[test]
    fn icons_flank_the_openings() {
        let rendering = Rendering {
            segments: Vec::new(),
            start_point: Point { x: 90.0, y: 72.0 },
            end_point: Point { x: 510.0, y: 408.0 },
        };
        let (left, right) = place_icons(&rendering, 90.0);
        assert_eq!(left, IconBox { x: 0.0, y: 27.0, size: 90.0 });
        assert_eq!(right, IconBox { x: 510.0, y: 363.0, size: 90.0 });
    }
}
