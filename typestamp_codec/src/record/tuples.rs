use crate::error::Result;
use crate::hasher::{Fingerprint, Schema, TypeHasher, TypeIdentity};
use crate::record::{OwnedRecord, Record, RecordSlots};
use crate::serde::{
    Field, FieldReader, FieldWriter, ReadLen, TypeSerializer, TypeUnserializer, WriteLen,
};

macro_rules! count {
    () => { 0usize };
    ($head:ident $($tail:ident)*) => { 1usize + count!($($tail)*) };
}

macro_rules! impl_record {
    ($($F:ident $f:ident),*) => {
        impl<$($F: Field),*> Schema for ($($F,)*) {
            const ARITY: usize = count!($($F)*);

            fn fingerprint<H: TypeHasher>() -> Fingerprint {
                let ids: &[TypeIdentity] = &[$(TypeIdentity::of::<$F>()),*];
                H::fold(ids)
            }
        }

        impl<'a, $($F: Field),*> Record for ($(&'a $F,)*) {
            type Schema = ($($F,)*);

            #[allow(unused_variables, unused_mut)]
            fn ser_fields(self, w: &mut FieldWriter<'_>) -> Result<WriteLen> {
                let ($($f,)*) = self;
                let mut w_len = 0;
                $(
                    w_len += *TypeSerializer::apply($f, w)?;
                )*
                Ok(WriteLen::new_manual(w_len))
            }
        }

        impl<'a, $($F: Field),*> RecordSlots for ($(&'a mut $F,)*) {
            type Schema = ($($F,)*);

            #[allow(unused_variables, unused_mut)]
            fn deser_fields(self, r: &mut FieldReader<'_>) -> Result<ReadLen> {
                let ($($f,)*) = self;
                let mut r_len = 0;
                $(
                    r_len += *TypeUnserializer::apply($f, r)?;
                )*
                Ok(ReadLen::new_manual(r_len))
            }
        }

        impl<$($F: Field + Default),*> OwnedRecord for ($($F,)*) {
            #[allow(unused_mut)]
            fn deser_owned(r: &mut FieldReader<'_>) -> Result<(ReadLen, Self)> {
                let ($(mut $f,)*) = ($($F::default(),)*);
                let r_len = ($(&mut $f,)*).deser_fields(r)?;
                Ok((r_len, ($($f,)*)))
            }
        }
    };
}

impl_record!();
impl_record!(T0 f0);
impl_record!(T0 f0, T1 f1);
impl_record!(T0 f0, T1 f1, T2 f2);
impl_record!(T0 f0, T1 f1, T2 f2, T3 f3);
impl_record!(T0 f0, T1 f1, T2 f2, T3 f3, T4 f4);
impl_record!(T0 f0, T1 f1, T2 f2, T3 f3, T4 f4, T5 f5);
impl_record!(T0 f0, T1 f1, T2 f2, T3 f3, T4 f4, T5 f5, T6 f6);
impl_record!(T0 f0, T1 f1, T2 f2, T3 f3, T4 f4, T5 f5, T6 f6, T7 f7);
impl_record!(T0 f0, T1 f1, T2 f2, T3 f3, T4 f4, T5 f5, T6 f6, T7 f7, T8 f8);
impl_record!(T0 f0, T1 f1, T2 f2, T3 f3, T4 f4, T5 f5, T6 f6, T7 f7, T8 f8, T9 f9);
impl_record!(T0 f0, T1 f1, T2 f2, T3 f3, T4 f4, T5 f5, T6 f6, T7 f7, T8 f8, T9 f9, T10 f10);
impl_record!(T0 f0, T1 f1, T2 f2, T3 f3, T4 f4, T5 f5, T6 f6, T7 f7, T8 f8, T9 f9, T10 f10, T11 f11);
