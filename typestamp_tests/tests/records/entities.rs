use super::super::helpers::entities::{person_len, Person, Point, Team, Weekday};
use super::super::helpers::gen;
use anyhow::Result;
use typestamp_codec::{decode, decode_owned, encode, CodecError, FieldKind};

pub fn test_entities() -> Result<()> {
    person_layout()?;
    nested_composites()?;
    composite_as_last_field()?;
    truncated_composite()?;
    rejecting_composite()?;
    Ok(())
}

fn person_layout() -> Result<()> {
    let ada = Person {
        name: String::from("Ada"),
        age: 36,
        tags: [String::from("math"), String::new()],
        home: Point { x: -1, y: 2 },
    };
    let id = 7u64;
    let bytes = encode((&id, &ada))?;
    assert_eq!(8 + 8 + person_len(&ada), bytes.len());

    let (mut id_out, mut ada_out) = (0u64, Person::default());
    let r_len = decode(&bytes, (&mut id_out, &mut ada_out))?;
    assert_eq!(bytes.len(), *r_len);
    assert_eq!((id, &ada), (id_out, &ada_out));

    Ok(())
}

fn nested_composites() -> Result<()> {
    assert_eq!(FieldKind::Composite, typestamp_codec::serde::kind_of::<Team>());
    assert_eq!(
        FieldKind::CompositeArray,
        typestamp_codec::serde::kind_of::<[Person; 3]>()
    );

    let mut rng = rand::thread_rng();
    for _ in 0..20 {
        let team = gen::gen_team(&mut rng);
        let motto = gen::gen_str(&mut rng, 40);
        let bytes = encode((&team, &motto))?;

        let exp_len = 8
            + person_len(&team.lead)
            + 2
            + team.members.iter().map(person_len).sum::<usize>()
            + 2
            + motto.len();
        assert_eq!(exp_len, bytes.len());

        let (team_out, motto_out): (Team, String) = decode_owned(&bytes)?;
        assert_eq!(team, team_out);
        assert_eq!(motto, motto_out);
    }

    Ok(())
}

fn composite_as_last_field() -> Result<()> {
    let mut rng = rand::thread_rng();
    let people = [gen::gen_person(&mut rng), gen::gen_person(&mut rng)];
    let stamp = 1_700_000_000i64;
    let bytes = encode((&stamp, &people))?;

    let mut extended = bytes.clone();
    extended.extend_from_slice(b"not a field");

    let (mut stamp_out, mut people_out) = (0i64, <[Person; 2]>::default());
    let r_len = decode(&extended, (&mut stamp_out, &mut people_out))?;
    assert_eq!(bytes.len(), *r_len);
    assert_eq!((stamp, &people), (stamp_out, &people_out));

    Ok(())
}

fn truncated_composite() -> Result<()> {
    let ada = Person {
        name: String::from("Ada"),
        age: 36,
        tags: Default::default(),
        home: Point::default(),
    };
    let mut bytes = encode((&ada,))?;
    bytes.truncate(bytes.len() - 3);

    let mut out = Person::default();
    let res = decode(&bytes, (&mut out,));
    assert!(matches!(
        res,
        Err(CodecError::SizeUnderrun {
            needed: 8,
            remaining: 5
        })
    ));

    Ok(())
}

fn rejecting_composite() -> Result<()> {
    let days = [Weekday(0), Weekday(6)];
    let bytes = encode((&days,))?;
    assert_eq!(8 + 2 + 2, bytes.len());

    let mut out = <[Weekday; 2]>::default();
    decode(&bytes, (&mut out,))?;
    assert_eq!(days, out);

    let bytes = encode((&[Weekday(3), Weekday(9)],))?;
    let mut out = <[Weekday; 2]>::default();
    let res = decode(&bytes, (&mut out,));
    assert!(matches!(res, Err(CodecError::Malformed(_))));
    assert_eq!(Weekday(3), out[0]);

    Ok(())
}
