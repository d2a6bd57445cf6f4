use super::super::helpers::entities::{Person, Point};
use anyhow::Result;
use itertools::Itertools;
use typestamp_codec::{
    decode, encode, peek_fingerprint, CodecError, Fingerprint, OrderedFold, Schema, Serialize,
    Unserialize, XorFold,
};

pub fn test_fingerprint_gaps() -> Result<()> {
    reordered_schemas_collide()?;
    repeated_types_cancel()?;
    unrelated_schemas_are_refused()?;
    ordered_fold_closes_the_gaps()?;
    Ok(())
}

fn reordered_schemas_collide() -> Result<()> {
    let fp = <(u8, String, Point, Person)>::fingerprint::<XorFold>();
    let perms = [
        <(String, u8, Point, Person)>::fingerprint::<XorFold>(),
        <(Person, Point, String, u8)>::fingerprint::<XorFold>(),
        <(Point, u8, Person, String)>::fingerprint::<XorFold>(),
    ];
    for other in perms {
        assert_eq!(fp, other);
    }

    /* The gate passes; the first field then misreads the bytes of another type. */
    let bytes = encode((&0x0003_0003u32, &String::from("abc")))?;
    let (mut s, mut n) = (String::new(), 0u32);
    let res = decode(&bytes, (&mut s, &mut n));
    match res {
        Ok(_) => assert_ne!("abc", s),
        Err(CodecError::SizeUnderrun { .. } | CodecError::InvalidLength(_)) => {}
        Err(e) => return Err(e.into()),
    }

    Ok(())
}

fn repeated_types_cancel() -> Result<()> {
    let one = encode((&1u32,))?;
    let three = encode((&1u32, &2u32, &3u32))?;
    assert_eq!(peek_fingerprint(&one)?, peek_fingerprint(&three)?);

    let pair = encode((&Point::default(), &Point::default()))?;
    assert_eq!(Fingerprint::EMPTY, peek_fingerprint(&pair)?);

    /* A single-field decode of a three-field record reads the first field only. */
    let mut out = 0u32;
    let r_len = decode(&three, (&mut out,))?;
    assert_eq!(8 + 4, *r_len);
    assert_eq!(1, out);

    Ok(())
}

fn unrelated_schemas_are_refused() -> Result<()> {
    let bytes = encode((&1u64, &String::from("x"), &[0u16; 4]))?;

    let mut a = 0i64;
    assert!(matches!(
        decode(&bytes, (&mut a,)),
        Err(CodecError::SchemaMismatch { .. })
    ));
    let (mut b, mut c) = (String::new(), Person::default());
    assert!(matches!(
        decode(&bytes, (&mut b, &mut c)),
        Err(CodecError::SchemaMismatch { .. })
    ));

    Ok(())
}

fn ordered_fold_closes_the_gaps() -> Result<()> {
    let fps = [
        <(u8, String, Point)>::fingerprint::<OrderedFold>(),
        <(u8, Point, String)>::fingerprint::<OrderedFold>(),
        <(String, u8, Point)>::fingerprint::<OrderedFold>(),
        <(String, Point, u8)>::fingerprint::<OrderedFold>(),
        <(Point, u8, String)>::fingerprint::<OrderedFold>(),
        <(Point, String, u8)>::fingerprint::<OrderedFold>(),
        <()>::fingerprint::<OrderedFold>(),
        <(u8, u8)>::fingerprint::<OrderedFold>(),
    ];
    for (x, y) in fps.iter().tuple_combinations() {
        assert_ne!(x, y);
    }

    let bytes = <Serialize<OrderedFold>>::apply((&1u32, &2u32, &3u32))?;
    let mut out = 0u32;
    assert!(matches!(
        <Unserialize<OrderedFold>>::apply(&bytes, (&mut out,)),
        Err(CodecError::SchemaMismatch { .. })
    ));
    let mut outs = (0u32, 0u32, 0u32);
    <Unserialize<OrderedFold>>::apply(&bytes, (&mut outs.0, &mut outs.1, &mut outs.2))?;
    assert_eq!((1, 2, 3), outs);

    /* Fingerprints from different hashers do not mix. */
    assert!(!<Unserialize>::check_type::<(u32, u32, u32)>(&bytes)?);

    Ok(())
}
