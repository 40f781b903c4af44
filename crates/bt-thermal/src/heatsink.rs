use bt_core::{CoreResult, Power, Real, ThermalResistance, amps, ensure_finite, volts};

/// Operating point and datasheet values, as entered by the user.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeatsinkInputs {
    /// Operating junction temperature (°C).
    pub temp_junction_c: Real,
    /// Maximum ambient operating temperature (°C).
    pub temp_ambient_c: Real,
    /// Voltage drop across the junction (V).
    pub voltage_drop_v: Real,
    /// Current at full load (A).
    pub current_a: Real,
    /// Junction to case resistance (°C/W).
    pub r_junction_case: Real,
    /// Case to heat sink resistance (°C/W).
    pub r_case_sink: Real,
}

impl HeatsinkInputs {
    pub fn power_dissipated(&self) -> Power {
        volts(self.voltage_drop_v) * amps(self.current_a)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeatsinkResult {
    pub power: Power,
    /// Required junction to ambient resistance.
    pub r_junction_ambient: ThermalResistance,
    /// Required heat sink to ambient resistance.
    pub r_sink_ambient: ThermalResistance,
}

impl HeatsinkResult {
    /// Fails on the first non-finite resistance, as produced by zero power.
    pub fn check_finite(&self) -> CoreResult<()> {
        ensure_finite(self.r_junction_ambient.value(), "Rja")?;
        ensure_finite(self.r_sink_ambient.value(), "Rsa")?;
        Ok(())
    }
}

/// Straight-line evaluation; zero power propagates infinity or NaN rather than failing.
pub fn compute(inputs: &HeatsinkInputs) -> HeatsinkResult {
    let power = inputs.power_dissipated();
    let rise_c = inputs.temp_junction_c - inputs.temp_ambient_c;

    let r_junction_ambient = ThermalResistance::from_rise(rise_c, power);
    let r_sink_ambient = r_junction_ambient
        - ThermalResistance::per_watt(inputs.r_junction_case)
        - ThermalResistance::per_watt(inputs.r_case_sink);

    tracing::debug!(
        power_w = bt_core::as_watts(power),
        rise_c,
        rja = r_junction_ambient.value(),
        rsa = r_sink_ambient.value(),
        "computed heat sink budget"
    );

    HeatsinkResult {
        power,
        r_junction_ambient,
        r_sink_ambient,
    }
}
