//! Ambient entities never linger outside the field plus its margin.

use dote::core::{
    respawn_meteor, respawn_star, Field, Meteor, MeteorShower, SimpleRng, Star, StarField,
};
use dote::types::{METEOR_POOL_CAPACITY, RESPAWN_MARGIN};

#[test]
fn pools_stay_inside_the_margin_for_many_seeds() {
    for seed in 1..40u32 {
        let mut rng = SimpleRng::new(seed);
        let field = Field::new(16 + (seed as u16 * 7) % 100, 8 + (seed as u16 * 3) % 40);
        let mut stars = StarField::default();
        let mut meteors = MeteorShower::default();
        let count = StarField::density(field.cols as u16, field.rows as u16);
        stars.populate(&mut rng, field, count);
        meteors.populate(&mut rng, field, METEOR_POOL_CAPACITY);

        for _ in 0..400 {
            stars.update(&mut rng, field);
            meteors.update(&mut rng, field);
            assert!(stars.iter().all(|s| field.contains(s.x, s.y)), "seed {seed}");
            assert!(meteors.iter().all(|m| field.contains(m.x, m.y)), "seed {seed}");
        }
    }
}

#[test]
fn star_past_the_left_margin_comes_back_on_the_right_edge() {
    let field = Field::new(40, 20);
    let mut rng = SimpleRng::new(5);
    let gone = Star {
        x: -(RESPAWN_MARGIN as f32) - 0.5,
        ..Star::scattered(&mut rng, field)
    };
    let back = respawn_star(gone, &mut rng, field);
    assert_eq!(back.x, 39.0);
    assert!(back.y >= 0.0 && back.y < 20.0);
}

#[test]
fn meteor_below_the_margin_respawns_along_the_top() {
    let field = Field::new(40, 20);
    let mut rng = SimpleRng::new(5);
    let gone = Meteor {
        y: 20.0 + RESPAWN_MARGIN as f32 + 1.0,
        ..Meteor::spawn(&mut rng, field)
    };
    let back = respawn_meteor(gone, &mut rng, field);
    assert!(back.y <= 0.0);
    assert!(field.contains(back.x, back.y));
    assert_eq!(back.age, 0);
}

#[test]
fn entity_inside_the_margin_is_left_alone() {
    let field = Field::new(40, 20);
    let mut rng = SimpleRng::new(9);
    let star = Star {
        x: -(RESPAWN_MARGIN as f32) + 0.5,
        ..Star::scattered(&mut rng, field)
    };
    assert_eq!(respawn_star(star, &mut rng, field), star);
}
