//! Sun times for a day at a given position.
//!
//! Uses the low-precision solar transit model (mean anomaly, equation of
//! center, declination) behind the common `getTimes` calculators. Good to
//! about a minute for mid latitudes.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::f64::consts::PI;

const DEG: f64 = PI / 180.0;
const DAY_MS: f64 = 86_400_000.0;
const J1970: f64 = 2_440_588.0;
const J2000: f64 = 2_451_545.0;
const J0: f64 = 0.0009;
const OBLIQUITY: f64 = 23.4397 * DEG;

/// Sun altitudes (degrees) and the morning/evening events they mark
const SUN_ANGLES: [(f64, Event, Event); 6] = [
    (-0.833, Event::SunriseStart, Event::SunsetEnd),
    (-0.3, Event::SunriseEnd, Event::SunsetStart),
    (-6.0, Event::CivilDawn, Event::CivilDusk),
    (-12.0, Event::NauticalDawn, Event::NauticalDusk),
    (-18.0, Event::AstronomicalDawn, Event::AstronomicalDusk),
    (6.0, Event::GoldenHourEnd, Event::GoldenHourStart),
];

#[derive(Debug, Clone, Copy)]
enum Event {
    AstronomicalDawn,
    NauticalDawn,
    CivilDawn,
    SunriseStart,
    SunriseEnd,
    GoldenHourEnd,
    GoldenHourStart,
    SunsetStart,
    SunsetEnd,
    CivilDusk,
    NauticalDusk,
    AstronomicalDusk,
}

/// Sun events of one day, in UTC.
///
/// An event is `None` when the sun never crosses its altitude that day
/// (midnight sun, polar night).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Times {
    pub astronomical_dawn: Option<DateTime<Utc>>,
    pub nautical_dawn: Option<DateTime<Utc>>,
    pub civil_dawn: Option<DateTime<Utc>>,
    pub sunrise_start: Option<DateTime<Utc>>,
    pub sunrise_end: Option<DateTime<Utc>>,
    pub golden_hour_end: Option<DateTime<Utc>>,

    pub solar_noon: Option<DateTime<Utc>>,

    pub golden_hour_start: Option<DateTime<Utc>>,
    pub sunset_start: Option<DateTime<Utc>>,
    pub sunset_end: Option<DateTime<Utc>>,
    pub civil_dusk: Option<DateTime<Utc>>,
    pub nautical_dusk: Option<DateTime<Utc>>,
    pub astronomical_dusk: Option<DateTime<Utc>>,

    pub nadir: Option<DateTime<Utc>>,
}

impl Times {
    fn set(&mut self, event: Event, at: Option<DateTime<Utc>>) {
        let slot = match event {
            Event::AstronomicalDawn => &mut self.astronomical_dawn,
            Event::NauticalDawn => &mut self.nautical_dawn,
            Event::CivilDawn => &mut self.civil_dawn,
            Event::SunriseStart => &mut self.sunrise_start,
            Event::SunriseEnd => &mut self.sunrise_end,
            Event::GoldenHourEnd => &mut self.golden_hour_end,
            Event::GoldenHourStart => &mut self.golden_hour_start,
            Event::SunsetStart => &mut self.sunset_start,
            Event::SunsetEnd => &mut self.sunset_end,
            Event::CivilDusk => &mut self.civil_dusk,
            Event::NauticalDusk => &mut self.nautical_dusk,
            Event::AstronomicalDusk => &mut self.astronomical_dusk,
        };
        *slot = at;
    }
}

fn to_julian(date: &DateTime<Utc>) -> f64 {
    date.timestamp_millis() as f64 / DAY_MS - 0.5 + J1970
}

fn from_julian(j: f64) -> Option<DateTime<Utc>> {
    let ms = (j + 0.5 - J1970) * DAY_MS;
    if !ms.is_finite() {
        return None;
    }
    DateTime::from_timestamp_millis(ms.round() as i64)
}

fn solar_mean_anomaly(d: f64) -> f64 {
    DEG * (357.5291 + 0.98560028 * d)
}

fn ecliptic_longitude(m: f64) -> f64 {
    let center = DEG * (1.9148 * m.sin() + 0.02 * (2.0 * m).sin() + 0.0003 * (3.0 * m).sin());
    let perihelion = DEG * 102.9372;
    m + center + perihelion + PI
}

fn declination(l: f64) -> f64 {
    (OBLIQUITY.sin() * l.sin()).asin()
}

fn approx_transit(hour_angle: f64, lw: f64, n: f64) -> f64 {
    J0 + (hour_angle + lw) / (2.0 * PI) + n
}

fn solar_transit(ds: f64, m: f64, l: f64) -> f64 {
    J2000 + ds + 0.0053 * m.sin() - 0.0069 * (2.0 * l).sin()
}

/// Hour angle at which the sun reaches altitude `h`, `None` if it never does
fn hour_angle(h: f64, phi: f64, dec: f64) -> Option<f64> {
    let cos_w = (h.sin() - phi.sin() * dec.sin()) / (phi.cos() * dec.cos());
    (-1.0..=1.0).contains(&cos_w).then(|| cos_w.acos())
}

/// Sun times for the solar day containing `date`.
pub fn calculate_times(latitude: f64, longitude: f64, date: DateTime<Utc>) -> Times {
    let lw = -longitude * DEG;
    let phi = latitude * DEG;

    let d = to_julian(&date) - J2000;
    let n = (d - J0 - lw / (2.0 * PI)).round();
    let ds = approx_transit(0.0, lw, n);

    let m = solar_mean_anomaly(ds);
    let l = ecliptic_longitude(m);
    let dec = declination(l);

    let noon = solar_transit(ds, m, l);

    let mut times = Times {
        solar_noon: from_julian(noon),
        nadir: from_julian(noon - 0.5),
        ..Default::default()
    };

    for (angle, rise, set) in SUN_ANGLES {
        let set_j = hour_angle(angle * DEG, phi, dec)
            .map(|w| solar_transit(approx_transit(w, lw, n), m, l));
        let rise_j = set_j.map(|j| noon - (j - noon));

        times.set(rise, rise_j.and_then(from_julian));
        times.set(set, set_j.and_then(from_julian));
    }

    times
}
