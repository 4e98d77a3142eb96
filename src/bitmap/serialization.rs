use std::error::Error as StdError;
use std::io;

use bytemuck::cast_slice_mut;
use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};

use super::container::Container;
use super::store::{ArrayStore, BitmapStore, Interval, RunStore, Store, ARRAY_LIMIT, BITMAP_LENGTH};
use crate::RoaringBitmap;

pub const SERIAL_COOKIE_NO_RUNCONTAINER: u32 = 12346;
pub const SERIAL_COOKIE: u16 = 12347;
pub const NO_OFFSET_THRESHOLD: usize = 4;

const DESCRIPTION_BYTES: usize = 4;
const OFFSET_BYTES: usize = 4;
const BYTES_PER_BITMAP: usize = 8 * BITMAP_LENGTH;

fn container_body_len(store: &Store) -> usize {
    match store {
        Store::Array(values) => values.len() as usize * 2,
        Store::Bitmap(_) => BYTES_PER_BITMAP,
        Store::Run(runs) => 2 + runs.run_count() * 4,
    }
}

impl RoaringBitmap {
    /// Size in bytes the wire-format encoding of this bitmap would take.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use roaring::RoaringBitmap;
    ///
    /// let rb: RoaringBitmap = (1..4).collect();
    /// let mut bytes = Vec::with_capacity(rb.serialized_size());
    /// rb.serialize_into(&mut bytes).unwrap();
    /// assert_eq!(bytes.len(), rb.serialized_size());
    /// ```
    pub fn serialized_size(&self) -> usize {
        let n = self.containers.len();
        let has_run = self.containers.iter().any(Container::has_run_compression);

        let cookie_header = if has_run { 4 + (n + 7) / 8 } else { 8 };
        let descriptive_header = n * DESCRIPTION_BYTES;
        let needs_offsets = !has_run || n >= NO_OFFSET_THRESHOLD;
        let offset_header = if needs_offsets { n * OFFSET_BYTES } else { 0 };
        let bodies: usize = self.containers.iter().map(|c| container_body_len(&c.store)).sum();

        cookie_header + descriptive_header + offset_header + bodies
    }

    /// Serializes this bitmap into the [Roaring wire format][format], producing the
    /// run-presence bitset and run container bodies whenever this bitmap actually
    /// holds run-compressed containers.
    ///
    /// [format]: https://github.com/RoaringBitmap/RoaringFormatSpec
    ///
    /// # Examples
    ///
    /// ```rust
    /// use roaring::RoaringBitmap;
    ///
    /// let rb1: RoaringBitmap = (1..4).collect();
    /// let mut bytes = vec![];
    /// rb1.serialize_into(&mut bytes).unwrap();
    /// let rb2 = RoaringBitmap::deserialize_from(&bytes[..]).unwrap();
    ///
    /// assert_eq!(rb1, rb2);
    /// ```
    pub fn serialize_into<W: io::Write>(&self, mut writer: W) -> io::Result<()> {
        let n = self.containers.len();
        let has_run = self.containers.iter().any(Container::has_run_compression);

        if has_run {
            writer.write_u16::<LittleEndian>(SERIAL_COOKIE)?;
            writer.write_u16::<LittleEndian>((n - 1) as u16)?;

            let mut bitset = vec![0u8; (n + 7) / 8];
            for (i, container) in self.containers.iter().enumerate() {
                if container.has_run_compression() {
                    bitset[i / 8] |= 1 << (i % 8);
                }
            }
            writer.write_all(&bitset)?;
        } else {
            writer.write_u32::<LittleEndian>(SERIAL_COOKIE_NO_RUNCONTAINER)?;
            writer.write_u32::<LittleEndian>(n as u32)?;
        }

        for container in &self.containers {
            writer.write_u16::<LittleEndian>(container.key)?;
            writer.write_u16::<LittleEndian>((container.len() - 1) as u16)?;
        }

        let needs_offsets = !has_run || n >= NO_OFFSET_THRESHOLD;
        if needs_offsets {
            let cookie_header = if has_run { 4 + (n + 7) / 8 } else { 8 };
            let mut offset = (cookie_header + n * DESCRIPTION_BYTES + n * OFFSET_BYTES) as u32;
            for container in &self.containers {
                writer.write_u32::<LittleEndian>(offset)?;
                offset += container_body_len(&container.store) as u32;
            }
        }

        for container in &self.containers {
            match &container.store {
                Store::Array(values) => {
                    for &value in values.iter() {
                        writer.write_u16::<LittleEndian>(value)?;
                    }
                }
                Store::Bitmap(bits) => {
                    for &word in bits.as_array() {
                        writer.write_u64::<LittleEndian>(word)?;
                    }
                }
                Store::Run(runs) => {
                    writer.write_u16::<LittleEndian>(runs.run_count() as u16)?;
                    for run in runs.runs() {
                        writer.write_u16::<LittleEndian>(run.start)?;
                        writer.write_u16::<LittleEndian>(run.end - run.start)?;
                    }
                }
            }
        }

        Ok(())
    }

    /// Deserializes a bitmap from the [Roaring wire format][format], validating every
    /// internal invariant (sorted/deduplicated arrays, sorted/disjoint runs, bitmap
    /// cardinality) along the way. Prefer [`RoaringBitmap::deserialize_unchecked_from`]
    /// for data already known to be well-formed.
    ///
    /// [format]: https://github.com/RoaringBitmap/RoaringFormatSpec
    ///
    /// # Examples
    ///
    /// ```rust
    /// use roaring::RoaringBitmap;
    ///
    /// let rb1: RoaringBitmap = (1..4).collect();
    /// let mut bytes = vec![];
    /// rb1.serialize_into(&mut bytes).unwrap();
    /// let rb2 = RoaringBitmap::deserialize_from(&bytes[..]).unwrap();
    ///
    /// assert_eq!(rb1, rb2);
    /// ```
    pub fn deserialize_from<R: io::Read>(reader: R) -> io::Result<RoaringBitmap> {
        RoaringBitmap::deserialize_from_impl(
            reader,
            ArrayStore::try_from,
            BitmapStore::try_from,
            RunStore::try_from_runs,
        )
    }

    /// Deserializes a bitmap from the [Roaring wire format][format] without checking
    /// that the container contents satisfy their representation invariants. Memory
    /// safe, but a corrupt or adversarial input can produce a bitmap with a
    /// disordered array, overlapping runs, or a wrong cached cardinality.
    ///
    /// [format]: https://github.com/RoaringBitmap/RoaringFormatSpec
    pub fn deserialize_unchecked_from<R: io::Read>(reader: R) -> io::Result<RoaringBitmap> {
        RoaringBitmap::deserialize_from_impl::<
            R,
            _,
            std::convert::Infallible,
            _,
            std::convert::Infallible,
            _,
            std::convert::Infallible,
        >(
            reader,
            |values| Ok(ArrayStore::from_vec_unchecked(values)),
            |len, bits| Ok(BitmapStore::from_unchecked(len, bits)),
            |runs| Ok(RunStore::from_runs_unchecked(runs)),
        )
    }

    fn deserialize_from_impl<R, A, AErr, B, BErr, C, CErr>(
        mut reader: R,
        new_array: A,
        new_bitmap: B,
        new_run: C,
    ) -> io::Result<RoaringBitmap>
    where
        R: io::Read,
        A: Fn(Vec<u16>) -> Result<ArrayStore, AErr>,
        AErr: StdError + Send + Sync + 'static,
        B: Fn(u64, Box<[u64; BITMAP_LENGTH]>) -> Result<BitmapStore, BErr>,
        BErr: StdError + Send + Sync + 'static,
        C: Fn(Vec<Interval>) -> Result<RunStore, CErr>,
        CErr: StdError + Send + Sync + 'static,
    {
        let (size, has_offsets, has_run_containers) = {
            let cookie = reader.read_u32::<LittleEndian>()?;
            if cookie == SERIAL_COOKIE_NO_RUNCONTAINER {
                (reader.read_u32::<LittleEndian>()? as usize, true, false)
            } else if (cookie as u16) == SERIAL_COOKIE {
                let size = ((cookie >> 16) + 1) as usize;
                (size, size >= NO_OFFSET_THRESHOLD, true)
            } else {
                return Err(io::Error::new(io::ErrorKind::InvalidData, "unrecognized serial cookie"));
            }
        };

        if size > u16::MAX as usize + 1 {
            return Err(io::Error::new(io::ErrorKind::InvalidData, "container count out of range"));
        }

        let run_container_bitmap = if has_run_containers {
            let mut bitset = vec![0u8; (size + 7) / 8];
            reader.read_exact(&mut bitset)?;
            Some(bitset)
        } else {
            None
        };

        let mut description_bytes = vec![0u8; size * DESCRIPTION_BYTES];
        reader.read_exact(&mut description_bytes)?;
        let mut description_bytes = &description_bytes[..];

        if has_offsets {
            let mut offsets = vec![0u8; size * OFFSET_BYTES];
            reader.read_exact(&mut offsets)?;
            drop(offsets);
        }

        let mut containers = Vec::with_capacity(size);

        for i in 0..size {
            let key = description_bytes.read_u16::<LittleEndian>()?;
            let cardinality = u64::from(description_bytes.read_u16::<LittleEndian>()?) + 1;

            let is_run_container =
                run_container_bitmap.as_ref().is_some_and(|bm| bm[i / 8] & (1 << (i % 8)) != 0);

            let store = if is_run_container {
                let run_count = reader.read_u16::<LittleEndian>()?;
                let mut bytes = vec![0u16; run_count as usize * 2];
                reader.read_exact(cast_slice_mut(&mut bytes))?;
                bytes.iter_mut().for_each(|n| *n = u16::from_le(*n));

                let mut runs = Vec::with_capacity(run_count as usize);
                for pair in bytes.chunks_exact(2) {
                    let (start, length) = (pair[0], pair[1]);
                    let end = start
                        .checked_add(length)
                        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidData, "run overflowed u16"))?;
                    runs.push(Interval::new(start, end));
                }

                let run_store =
                    new_run(runs).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
                Store::Run(run_store)
            } else if cardinality <= ARRAY_LIMIT {
                let mut values = vec![0u16; cardinality as usize];
                reader.read_exact(cast_slice_mut(&mut values))?;
                values.iter_mut().for_each(|n| *n = u16::from_le(*n));
                let array =
                    new_array(values).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
                Store::Array(array)
            } else {
                let mut words = Box::new([0u64; BITMAP_LENGTH]);
                reader.read_exact(cast_slice_mut(&mut words[..]))?;
                words.iter_mut().for_each(|n| *n = u64::from_le(*n));
                let bitmap = new_bitmap(cardinality, words)
                    .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
                Store::Bitmap(bitmap)
            };

            containers.push(Container { key, store });
        }

        Ok(RoaringBitmap { containers })
    }
}
