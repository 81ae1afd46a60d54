#![warn(missing_docs)]

//! # endian_bits
//!
//! endian_bits converts primitive values to and from bytes in an explicitly
//! chosen byte order, no matter what the byte order of the host machine is.
//! It is meant as the bottom layer of binary file formats and wire protocols
//! that document a fixed endianness.
//!
//! ## Picking a byte order
//!
//! There is exactly one [`EndianConverter`] per [`ByteOrder`]. You obtain it
//! from [`little_endian`], [`big_endian`], or [`select`], and then use it for
//! all the values of your format:
//!
//! ```
//! use endian_bits::{ByteOrder, select};
//!
//! let converter = select(ByteOrder::BigEndian);
//! let bytes = converter.encode(0x01020304_u32);
//! assert_eq!(bytes, [0x01, 0x02, 0x03, 0x04]);
//! assert_eq!(converter.decode_u32(&bytes, 0), Ok(0x01020304));
//! ```
//!
//! ## Supported values
//!
//! | Type                      | Bytes                    |
//! |---------------------------|--------------------------|
//! | [`bool`]                  | 1                        |
//! | [`CodeUnit`]              | 2                        |
//! | [`i16`], [`u16`]          | 2                        |
//! | [`i32`], [`u32`], [`f32`] | 4                        |
//! | [`i64`], [`u64`], [`f64`] | 8                        |
//! | [`Decimal`]               | 16                       |
//! | UTF-16 text               | 2 for every code unit    |
//!
//! Fixed-width values are encoded into arrays of exactly their width, see
//! [`NativeBytes`]. Text is encoded code unit by code unit, so the
//! little endian converter produces UTF-16LE and the big endian converter
//! produces UTF-16BE:
//!
//! ```
//! use endian_bits::little_endian;
//!
//! let bytes = little_endian().encode_str("Hi");
//! assert_eq!(bytes, [0x48, 0x00, 0x69, 0x00]);
//! assert_eq!(little_endian().decode_string(&bytes, 0, bytes.len()).as_deref(), Ok("Hi"));
//! ```
//!
//! ## Errors
//!
//! Decoding never reads outside the given buffer. A start index outside the
//! buffer, a buffer that is too short, an odd byte count for text, or a
//! malformed decimal is reported as an [`Error`], see [`ErrorKind`].
//!
//! ## `no_std`
//!
//! All fixed-width conversions work without `std` and `alloc`. Encoding text
//! and decoding it into a [`String`](alloc::string::String) requires the
//! `alloc` feature, which is enabled by `std`. Without it, text can still be
//! decoded through [`EndianConverter::decode_utf16`].
//!
//! ## Diagnostics
//!
//! With the `tracing` feature, rejected byte ranges are reported as
//! `tracing` debug events.

// Disable the [`std`] standard crate when the "std" feature is not enabled.
#![cfg_attr(not(feature = "std"), no_std)]

// Enable the [`alloc`] standard crate when the "alloc" feature is enabled.
#[cfg(feature = "alloc")]
extern crate alloc;

pub mod byte_order;
pub mod error;

mod code_unit;
mod convert;
mod converter;
mod decimal;
mod native_bytes;
mod types;

pub use byte_order::ByteOrder;
pub use code_unit::CodeUnit;
pub use converter::{DecodeUtf16Chars, EndianConverter, big_endian, little_endian, native, select};
pub use decimal::Decimal;
pub use error::{Error, ErrorKind};
pub use native_bytes::NativeBytes;
