use std::marker::PhantomData;

use serde::{
	de::Error,
	ser::{SerializeSeq, SerializeTuple},
	Deserialize, Serialize,
};

use crate::{Range, RangeSet};

/// Ranges are serialized as `(start, end)` tuples.
impl<T: Serialize> Serialize for Range<T> {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: serde::Serializer,
	{
		let mut t = serializer.serialize_tuple(2)?;
		t.serialize_element(self.start())?;
		t.serialize_element(self.end())?;
		t.end()
	}
}

impl<'de, T: Ord + Deserialize<'de>> Deserialize<'de> for Range<T> {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: serde::Deserializer<'de>,
	{
		struct Visitor<T>(PhantomData<T>);

		impl<'de, T: Ord + Deserialize<'de>> serde::de::Visitor<'de> for Visitor<T> {
			type Value = Range<T>;

			fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
				write!(formatter, "a (start, end) range")
			}

			fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
			where
				A: serde::de::SeqAccess<'de>,
			{
				let start = seq
					.next_element()?
					.ok_or_else(|| A::Error::custom("missing start bound"))?;
				let end = seq
					.next_element()?
					.ok_or_else(|| A::Error::custom("missing end bound"))?;
				Range::new(start, end).map_err(A::Error::custom)
			}
		}

		deserializer.deserialize_tuple(2, Visitor(PhantomData))
	}
}

/// Sets are serialized as sequences of ranges.
impl<T: Serialize> Serialize for RangeSet<T> {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: serde::Serializer,
	{
		let mut seq = serializer.serialize_seq(Some(self.range_count()))?;

		for range in self {
			seq.serialize_element(range)?;
		}

		seq.end()
	}
}

/// Deserialized ranges are normalized: they may overlap or come in any order.
impl<'de, T: Ord + Clone + Deserialize<'de>> Deserialize<'de> for RangeSet<T> {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: serde::Deserializer<'de>,
	{
		struct Visitor<T>(PhantomData<T>);

		impl<'de, T: Ord + Clone + Deserialize<'de>> serde::de::Visitor<'de> for Visitor<T> {
			type Value = RangeSet<T>;

			fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
				write!(formatter, "a range set")
			}

			fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
			where
				A: serde::de::SeqAccess<'de>,
			{
				let mut ranges = Vec::with_capacity(seq.size_hint().unwrap_or(0));

				while let Some(range) = seq.next_element::<Range<T>>()? {
					ranges.push(range);
				}

				Ok(RangeSet::from(ranges))
			}
		}

		deserializer.deserialize_seq(Visitor(PhantomData))
	}
}
