mod cmp;
mod container;
mod fmt;
mod inherent;
mod iter;
mod ops;
#[cfg(test)]
mod proptests;
#[cfg(feature = "std")]
mod serialization;
mod store;

use self::cmp::Pairs;
pub use self::iter::{IntoIter, Iter};

/// A compressed bitmap using the [Roaring bitmap compression scheme](https://roaringbitmap.org/).
///
/// Every 32-bit value is split into a 16-bit high key and a 16-bit low key.
/// Each distinct high key owns exactly one container, kept sorted by key,
/// holding the low keys that share it in whichever of three representations
/// (array, bitmap, or run) best fits the data currently stored.
///
/// # Examples
///
/// ```rust
/// use roaring::RoaringBitmap;
///
/// let mut rb = RoaringBitmap::new();
///
/// // insert all primes less than 10
/// rb.insert(2);
/// rb.insert(3);
/// rb.insert(5);
/// rb.insert(7);
/// println!("total bits set to true: {}", rb.len());
/// ```
#[derive(PartialEq, Clone)]
pub struct RoaringBitmap {
    containers: Vec<container::Container>,
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for RoaringBitmap {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct BitmapVisitor;

        impl<'de> serde::de::Visitor<'de> for BitmapVisitor {
            type Value = RoaringBitmap;

            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                formatter.write_str("a serialized roaring bitmap")
            }

            fn visit_bytes<E>(self, bytes: &[u8]) -> Result<RoaringBitmap, E>
            where
                E: serde::de::Error,
            {
                RoaringBitmap::deserialize_from(bytes).map_err(serde::de::Error::custom)
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<RoaringBitmap, A::Error>
            where
                A: serde::de::SeqAccess<'de>,
            {
                let mut bytes: Vec<u8> = Vec::new();
                while let Some(el) = seq.next_element()? {
                    bytes.push(el);
                }
                RoaringBitmap::deserialize_from(&*bytes).map_err(serde::de::Error::custom)
            }
        }

        deserializer.deserialize_bytes(BitmapVisitor)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for RoaringBitmap {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut buf = Vec::with_capacity(self.serialized_size());
        self.serialize_into(&mut buf).map_err(serde::ser::Error::custom)?;
        serializer.serialize_bytes(&buf)
    }
}
