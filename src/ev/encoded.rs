//! Bit-packed edge attributes
//!
//! Every edge carries an [`EdgeFlags`] record: a fixed number of `u32` words
//! holding all encoded attributes side by side. Each encoded value is assigned
//! a word and a bit shift exactly once, through an [`InitializerConfig`], and
//! from then on reads and writes only its own bits.
//!
//! Layout of a two-direction field inside its word:
//!
//! ```text
//!   bit:  shift ............ shift+bits ............ shift+2*bits
//!         |   forward value   |    backward value    |
//! ```
//!
//! A field never straddles a word boundary; if the current word cannot hold
//! both directions the allocator moves on to the next word.

use crate::error::{Error, Result};

const WORD_BITS: u32 = u32::BITS;

/// Fixed-size attribute record of one edge
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EdgeFlags {
    words: Vec<u32>,
}

impl EdgeFlags {
    pub fn new(len: usize) -> Self {
        Self {
            words: vec![0; len],
        }
    }

    pub fn words(&self) -> &[u32] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Position of an encoded value inside [`EdgeFlags`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Slot {
    word: usize,
    shift: u32,
}

/// Assigns word/shift positions to encoded values.
///
/// Positions are handed out in registration order. Once all values are
/// registered, [`InitializerConfig::create_edge_flags`] builds records of the
/// final width.
#[derive(Debug, Clone, Default)]
pub struct InitializerConfig {
    words: usize,
    next_shift: u32,
}

impl InitializerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    fn allocate(&mut self, name: &str, used_bits: u32) -> Result<Slot> {
        if used_bits == 0 || used_bits > WORD_BITS {
            return Err(Error::invalid_config(format!(
                "encoded value '{name}' needs {used_bits} bits, must be within 1..={WORD_BITS}"
            )));
        }
        if self.words == 0 || self.next_shift + used_bits > WORD_BITS {
            self.words += 1;
            self.next_shift = 0;
        }
        let slot = Slot {
            word: self.words - 1,
            shift: self.next_shift,
        };
        self.next_shift += used_bits;
        Ok(slot)
    }

    /// Number of words a record needs for everything registered so far
    pub fn required_words(&self) -> usize {
        self.words
    }

    pub fn create_edge_flags(&self) -> EdgeFlags {
        EdgeFlags::new(self.words)
    }
}

/// Unsigned integer attribute of `bits` width, optionally stored per direction
#[derive(Debug, Clone, PartialEq)]
pub struct IntEncodedValue {
    name: String,
    bits: u32,
    store_two_directions: bool,
    slot: Option<Slot>,
}

impl IntEncodedValue {
    pub fn new(name: impl Into<String>, bits: u32, store_two_directions: bool) -> Self {
        Self {
            name: name.into(),
            bits,
            store_two_directions,
            slot: None,
        }
    }

    /// Reserve this value's bits in the record layout
    pub fn init(&mut self, config: &mut InitializerConfig) -> Result<()> {
        if self.slot.is_some() {
            return Err(Error::AlreadyInitialized {
                name: self.name.clone(),
            });
        }
        let used_bits = if self.store_two_directions {
            self.bits.saturating_mul(2)
        } else {
            self.bits
        };
        self.slot = Some(config.allocate(&self.name, used_bits)?);
        Ok(())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn bits(&self) -> u32 {
        self.bits
    }

    pub fn is_store_two_directions(&self) -> bool {
        self.store_two_directions
    }

    pub fn is_initialized(&self) -> bool {
        self.slot.is_some()
    }

    /// Largest raw value the field can hold
    pub fn max_raw(&self) -> u32 {
        if self.bits >= WORD_BITS {
            u32::MAX
        } else {
            (1u32 << self.bits) - 1
        }
    }

    /// Word index and bit shift for one direction.
    /// `reverse` is ignored for one-direction fields.
    fn locate(&self, reverse: bool, flags_len: usize) -> Result<(usize, u32)> {
        let slot = self.slot.ok_or_else(|| Error::NotInitialized {
            name: self.name.clone(),
        })?;
        if slot.word >= flags_len {
            return Err(Error::RecordTooSmall {
                name: self.name.clone(),
                word: slot.word,
                len: flags_len,
            });
        }
        let shift = if reverse && self.store_two_directions {
            slot.shift + self.bits
        } else {
            slot.shift
        };
        Ok((slot.word, shift))
    }

    pub fn set_int(&self, reverse: bool, flags: &mut EdgeFlags, value: u32) -> Result<()> {
        if value > self.max_raw() {
            return Err(Error::ValueOutOfRange {
                name: self.name.clone(),
                value: f64::from(value),
                min: 0.0,
                max: f64::from(self.max_raw()),
            });
        }
        let (word, shift) = self.locate(reverse, flags.len())?;
        let mask = u64::from(self.max_raw()) << shift;
        let current = u64::from(flags.words[word]);
        let updated = (current & !mask) | (u64::from(value) << shift);
        flags.words[word] = updated as u32;
        Ok(())
    }

    pub fn get_int(&self, reverse: bool, flags: &EdgeFlags) -> Result<u32> {
        let (word, shift) = self.locate(reverse, flags.len())?;
        Ok(((u64::from(flags.words[word]) >> shift) as u32) & self.max_raw())
    }
}

/// Fixed-point decimal attribute.
///
/// Stores `round((value - min) / factor)` in an [`IntEncodedValue`]. With
/// `use_maximum_as_infinity` the largest raw value is reserved for `+inf`,
/// which serves as the field's "unset" encoding.
#[derive(Debug, Clone, PartialEq)]
pub struct DecimalEncodedValue {
    raw: IntEncodedValue,
    factor: f64,
    min: f64,
    use_maximum_as_infinity: bool,
}

impl DecimalEncodedValue {
    pub fn new(
        name: impl Into<String>,
        bits: u32,
        factor: f64,
        min: f64,
        use_maximum_as_infinity: bool,
        store_two_directions: bool,
    ) -> Self {
        Self {
            raw: IntEncodedValue::new(name, bits, store_two_directions),
            factor,
            min,
            use_maximum_as_infinity,
        }
    }

    pub fn init(&mut self, config: &mut InitializerConfig) -> Result<()> {
        if !(self.factor.is_finite() && self.factor > 0.0) {
            return Err(Error::invalid_config(format!(
                "encoded value '{}' needs a positive finite factor, got {}",
                self.raw.name(),
                self.factor
            )));
        }
        if !self.min.is_finite() {
            return Err(Error::invalid_config(format!(
                "encoded value '{}' needs a finite minimum, got {}",
                self.raw.name(),
                self.min
            )));
        }
        if self.use_maximum_as_infinity && self.raw.bits() < 2 {
            return Err(Error::invalid_config(format!(
                "encoded value '{}' reserves infinity and needs at least 2 bits",
                self.raw.name()
            )));
        }
        self.raw.init(config)
    }

    pub fn name(&self) -> &str {
        self.raw.name()
    }

    pub fn factor(&self) -> f64 {
        self.factor
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn is_store_two_directions(&self) -> bool {
        self.raw.is_store_two_directions()
    }

    pub fn is_initialized(&self) -> bool {
        self.raw.is_initialized()
    }

    pub fn use_maximum_as_infinity(&self) -> bool {
        self.use_maximum_as_infinity
    }

    fn max_finite_raw(&self) -> u32 {
        if self.use_maximum_as_infinity {
            self.raw.max_raw().saturating_sub(1)
        } else {
            self.raw.max_raw()
        }
    }

    /// Largest finite value the field can hold
    pub fn max_storable_decimal(&self) -> f64 {
        self.min + self.factor * f64::from(self.max_finite_raw())
    }

    pub fn set_decimal(&self, reverse: bool, flags: &mut EdgeFlags, value: f64) -> Result<()> {
        if self.use_maximum_as_infinity && value == f64::INFINITY {
            return self.raw.set_int(reverse, flags, self.raw.max_raw());
        }
        let max = self.max_storable_decimal();
        // NaN fails both comparisons
        if !(value >= self.min && value <= max) {
            return Err(Error::ValueOutOfRange {
                name: self.name().to_string(),
                value,
                min: self.min,
                max,
            });
        }
        let raw = ((value - self.min) / self.factor).round() as u32;
        self.raw.set_int(reverse, flags, raw.min(self.max_finite_raw()))
    }

    pub fn get_decimal(&self, reverse: bool, flags: &EdgeFlags) -> Result<f64> {
        let raw = self.raw.get_int(reverse, flags)?;
        if self.use_maximum_as_infinity && raw == self.raw.max_raw() {
            return Ok(f64::INFINITY);
        }
        Ok(self.min + f64::from(raw) * self.factor)
    }
}
