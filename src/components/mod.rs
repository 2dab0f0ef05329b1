// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The component library: a closed set of ABCD-producing constructors.
//!
//! Per the design notes, component *types* exist only at the point of
//! construction; the [`crate::twoport::TwoPort`] they produce is the only
//! type that flows through the rest of the crate. [`ComponentKind`] is the
//! closed tagged-variant enumeration used where a component needs to be
//! named rather than merely constructed — the component-value sweep axis
//! and Monte-Carlo tolerance records.

mod error;
#[cfg(test)]
mod tests;

pub mod attenuators;
pub mod filters;
pub mod lmatch;
pub mod lumped;
pub mod stubs;
pub mod transmission_line;

pub use error::ComponentError;
pub use lumped::{
    ideal_transformer, series_capacitor, series_impedance, series_inductor, series_resistor,
    series_rlc, shunt_admittance, shunt_capacitor, shunt_inductor, shunt_resistor, shunt_rlc,
};
pub use stubs::{
    match_terminated, open_terminated, series_open_stub, series_short_stub, shunt_open_stub,
    shunt_short_stub, shunt_tee, short_terminated,
};
pub use transmission_line::{
    line_from_electrical_length_deg, lossless_line, lossy_line_db_per_m, quarter_wave_line,
    transmission_line,
};

use crate::twoport::TwoPort;

/// The closed set of single-value component kinds that the component-value
/// sweep (§ sweep descriptors) and Monte-Carlo tolerances can name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ComponentKind {
    SeriesR,
    SeriesL,
    SeriesC,
    ShuntR,
    ShuntL,
    ShuntC,
    TransmissionLine,
}

impl ComponentKind {
    /// `true` for kinds whose value must stay strictly positive under
    /// perturbation (every kind in this closed set is a physical
    /// magnitude, so this is always `true`; kept as a named predicate
    /// because the Monte-Carlo sampler calls it by name).
    pub fn is_physical(&self) -> bool {
        true
    }
}

/// Build the primitive two-port for `kind` at `value` (ohms, henries,
/// farads, or meters for `TransmissionLine`) at `frequency_hz`.
///
/// For `TransmissionLine`, `value` is the physical length in meters against
/// a fixed real characteristic impedance of 50 ohms and unity velocity
/// factor; callers needing a different characteristic impedance or
/// velocity factor should call [`transmission_line::transmission_line`]
/// directly instead of going through this dispatcher.
pub fn build(kind: ComponentKind, value: f64, frequency_hz: f64) -> Result<TwoPort, ComponentError> {
    match kind {
        ComponentKind::SeriesR => series_resistor(value),
        ComponentKind::SeriesL => series_inductor(value, frequency_hz),
        ComponentKind::SeriesC => series_capacitor(value, frequency_hz),
        ComponentKind::ShuntR => shunt_resistor(value),
        ComponentKind::ShuntL => shunt_inductor(value, frequency_hz),
        ComponentKind::ShuntC => shunt_capacitor(value, frequency_hz),
        ComponentKind::TransmissionLine => {
            transmission_line::lossless_line(value, 50.0, frequency_hz, 1.0)
        }
    }
}
