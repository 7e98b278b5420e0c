//! Bundled fallback dataset
//!
//! A static sample of Philippine annual mean temperatures covering the last
//! three decades of the record, used whenever no external source is
//! available. Values are degrees Celsius; the smooth column is the centered
//! five-year moving average the full dataset ships with.

use predictor_spi::TemperatureRecord;

/// `(year, annual_mean, five_year_smooth)` rows, ascending by year.
const SAMPLE: &[(i32, f64, f64)] = &[
    (1991, 26.38, 26.42),
    (1992, 26.21, 26.43),
    (1993, 26.45, 26.44),
    (1994, 26.52, 26.47),
    (1995, 26.48, 26.49),
    (1996, 26.41, 26.51),
    (1997, 26.67, 26.53),
    (1998, 26.89, 26.57),
    (1999, 26.44, 26.60),
    (2000, 26.51, 26.62),
    (2001, 26.63, 26.64),
    (2002, 26.71, 26.66),
    (2003, 26.68, 26.68),
    (2004, 26.72, 26.70),
    (2005, 26.77, 26.72),
    (2006, 26.64, 26.74),
    (2007, 26.70, 26.76),
    (2008, 26.61, 26.78),
    (2009, 26.83, 26.80),
    (2010, 26.95, 26.83),
    (2011, 26.69, 26.85),
    (2012, 26.74, 26.87),
    (2013, 26.81, 26.89),
    (2014, 26.88, 26.91),
    (2015, 26.97, 26.94),
    (2016, 27.08, 26.97),
    (2017, 26.92, 27.00),
    (2018, 26.94, 27.03),
    (2019, 27.11, 27.07),
    (2020, 27.14, 27.11),
    (2021, 27.05, 27.15),
    (2022, 27.23, 27.19),
];

/// The bundled static sample series.
pub fn fallback_series() -> Vec<TemperatureRecord> {
    SAMPLE
        .iter()
        .map(|&(year, annual_mean, five_year_smooth)| {
            TemperatureRecord::new(year, annual_mean, five_year_smooth)
        })
        .collect()
}
