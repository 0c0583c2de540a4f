// SPDX-License-Identifier: MPL-2.0
//! `instafilter` applies Core Image style filters to a picture with an
//! adjustable amount, built with the Iced GUI framework.
//!
//! The crate is split into pure processing modules ([`filter`], [`media`],
//! [`picker`]) and the Iced front end ([`app`], [`ui`]), with Fluent based
//! localization in [`i18n`].

pub mod app;
pub mod error;
pub mod filter;
pub mod i18n;
pub mod media;
pub mod picker;
pub mod ui;

#[cfg(test)]
pub mod test_utils;
