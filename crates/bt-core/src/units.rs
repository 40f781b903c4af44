// bt-core/src/units.rs

use core::fmt;
use core::ops::Sub;

use uom::si::f64::{
    ElectricCurrent as UomElectricCurrent, ElectricPotential as UomElectricPotential,
    Power as UomPower,
};

use crate::Real;

// Public canonical unit types (SI, f64)
pub type Current = UomElectricCurrent;
pub type Power = UomPower;
pub type Voltage = UomElectricPotential;

#[inline]
pub fn volts(v: f64) -> Voltage {
    use uom::si::electric_potential::volt;
    Voltage::new::<volt>(v)
}

#[inline]
pub fn amps(v: f64) -> Current {
    use uom::si::electric_current::ampere;
    Current::new::<ampere>(v)
}

#[inline]
pub fn as_watts(p: Power) -> Real {
    use uom::si::power::watt;
    p.get::<watt>()
}

/// Thermal resistance in K/W.
///
/// A temperature rise of one kelvin equals one degree Celsius, so the stored
/// value reads directly as °C/W.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct ThermalResistance(Real);

impl ThermalResistance {
    #[inline]
    pub const fn per_watt(v: Real) -> Self {
        Self(v)
    }

    /// Resistance that produces `rise_c` degrees of temperature rise at `power`.
    ///
    /// Zero power is not rejected: the result is a signed infinity, or NaN for
    /// a zero rise.
    #[inline]
    pub fn from_rise(rise_c: Real, power: Power) -> Self {
        Self(rise_c / as_watts(power))
    }

    #[inline]
    pub const fn value(self) -> Real {
        self.0
    }
}

impl Sub for ThermalResistance {
    type Output = ThermalResistance;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl fmt::Display for ThermalResistance {
    // Forwards the formatter so `{:.2}` applies to the raw value.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_smoke() {
        let _v = volts(4.7);
        let _i = amps(1.0);
        let _p: Power = volts(4.7) * amps(1.0);
        let _r = ThermalResistance::per_watt(0.5);
    }

    #[test]
    fn volts_times_amps_is_watts() {
        let p: Power = volts(4.7) * amps(2.0);
        assert_eq!(as_watts(p), 4.7 * 2.0);
    }

    #[test]
    fn from_rise_divides_by_power() {
        let r = ThermalResistance::from_rise(50.0, volts(4.7) * amps(1.0));
        assert_eq!(r.value(), 50.0 / 4.7);
    }

    #[test]
    fn zero_power_yields_non_finite() {
        assert_eq!(
            ThermalResistance::from_rise(50.0, volts(0.0) * amps(1.0)).value(),
            f64::INFINITY
        );
        assert_eq!(
            ThermalResistance::from_rise(-50.0, volts(0.0) * amps(1.0)).value(),
            f64::NEG_INFINITY
        );
        assert!(ThermalResistance::from_rise(0.0, volts(0.0) * amps(1.0)).value().is_nan());
    }

    #[test]
    fn display_honours_precision() {
        let r = ThermalResistance::per_watt(10.638_297_872);
        assert_eq!(format!("{r:.2}"), "10.64");
        let diff = r - ThermalResistance::per_watt(4.5);
        assert_eq!(format!("{diff:.2}"), "6.14");
    }
}
