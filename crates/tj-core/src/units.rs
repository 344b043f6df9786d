// tj-core/src/units.rs

use uom::si::f64::{
    Length as UomLength, Pressure as UomPressure,
    ThermodynamicTemperature as UomThermodynamicTemperature, Velocity as UomVelocity,
};

// Public canonical unit types (SI, f64)
pub type Length = UomLength;
pub type Pressure = UomPressure;
pub type Temperature = UomThermodynamicTemperature;
pub type Velocity = UomVelocity;

#[inline]
pub fn pa(v: f64) -> Pressure {
    use uom::si::pressure::pascal;
    Pressure::new::<pascal>(v)
}

#[inline]
pub fn k(v: f64) -> Temperature {
    use uom::si::thermodynamic_temperature::kelvin;
    Temperature::new::<kelvin>(v)
}

#[inline]
pub fn m(v: f64) -> Length {
    use uom::si::length::meter;
    Length::new::<meter>(v)
}

#[inline]
pub fn mps(v: f64) -> Velocity {
    use uom::si::velocity::meter_per_second;
    Velocity::new::<meter_per_second>(v)
}

/// Magnitude in kelvin.
#[inline]
pub fn kelvin_of(t: Temperature) -> f64 {
    use uom::si::thermodynamic_temperature::kelvin;
    t.get::<kelvin>()
}

/// Magnitude in pascal.
#[inline]
pub fn pascal_of(p: Pressure) -> f64 {
    use uom::si::pressure::pascal;
    p.get::<pascal>()
}

/// Magnitude in meters.
#[inline]
pub fn meters_of(l: Length) -> f64 {
    use uom::si::length::meter;
    l.get::<meter>()
}

/// Magnitude in m/s.
#[inline]
pub fn mps_of(v: Velocity) -> f64 {
    use uom::si::velocity::meter_per_second;
    v.get::<meter_per_second>()
}

pub mod constants {
    /// ISA sea-level static temperature (K).
    pub const SEA_LEVEL_TEMPERATURE_K: f64 = 288.15;

    /// ISA sea-level static pressure (Pa).
    pub const SEA_LEVEL_PRESSURE_PA: f64 = 101_325.0;

    pub const SECONDS_PER_HOUR: f64 = 3600.0;

    pub const SECONDS_PER_MINUTE: f64 = 60.0;
}
