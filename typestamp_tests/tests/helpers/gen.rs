use super::entities::{Person, Point, Team};
use rand::distributions::Alphanumeric;
use rand::Rng;

pub fn gen_str(rng: &mut impl Rng, max_len: usize) -> String {
    let len = rng.gen_range(0..=max_len);
    rng.sample_iter(&Alphanumeric)
        .take(len)
        .map(char::from)
        .collect()
}

pub fn gen_point(rng: &mut impl Rng) -> Point {
    Point {
        x: rng.gen(),
        y: rng.gen(),
    }
}

pub fn gen_person(rng: &mut impl Rng) -> Person {
    Person {
        name: gen_str(rng, 24),
        age: rng.gen(),
        tags: [gen_str(rng, 8), gen_str(rng, 8)],
        home: gen_point(rng),
    }
}

pub fn gen_team(rng: &mut impl Rng) -> Team {
    Team {
        lead: gen_person(rng),
        members: [gen_person(rng), gen_person(rng), gen_person(rng)],
    }
}
