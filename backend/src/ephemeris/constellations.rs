//! Constellation lookup by sky position.
//!
//! Boundaries are the IAU 1930 Delporte lines, which run along constant right
//! ascension and declination of the B1875.0 equinox. The table below is the
//! Roman (1987) decomposition of those lines into bands: a point belongs to the
//! first band, in table order, whose lower declination is at or below the point
//! and whose right ascension range contains it.

use serde::{Deserialize, Serialize};
use siderust::astro::precession::precession_matrix_iau2006;
use siderust::time::JulianDate;

/// Constellation identity returned by the lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConstellationInfo {
    /// IAU three-letter abbreviation, e.g. `UMa`
    pub code: String,
    pub name: String,
}

/// Julian date (TT) of the B1875.0 equinox.
const B1875_JD: f64 = 2_405_889.258_550_475;

struct Band {
    ra_low: f64,
    ra_high: f64,
    dec_low: f64,
    code: &'static str,
}

const fn band(ra_low: f64, ra_high: f64, dec_low: f64, code: &'static str) -> Band {
    Band { ra_low, ra_high, dec_low, code }
}

// Hours, hours, degrees; B1875.0. Ordered by descending lower declination.
static BANDS: &[Band] = &[
    band(0.0, 24.0, 88.0, "UMi"),
    band(8.0, 14.5, 86.5, "UMi"),
    band(21.0, 23.0, 86.1667, "UMi"),
    band(18.0, 21.0, 86.0, "UMi"),
    band(0.0, 8.0, 85.0, "Cep"),
    band(9.1667, 10.6667, 82.0, "Cam"),
    band(0.0, 5.0, 80.0, "Cep"),
    band(10.6667, 14.5, 80.0, "Cam"),
    band(17.5, 18.0, 80.0, "UMi"),
    band(20.1667, 21.0, 80.0, "Dra"),
    band(0.0, 3.5083, 77.0, "Cep"),
    band(11.5, 13.5833, 77.0, "Cam"),
    band(16.5333, 17.5, 75.0, "UMi"),
    band(20.1667, 20.6667, 75.0, "Cep"),
    band(7.9667, 9.1667, 73.5, "Cam"),
    band(9.1667, 11.3333, 73.5, "Dra"),
    band(13.0, 16.5333, 70.0, "UMi"),
    band(3.1, 3.4167, 68.0, "Cas"),
    band(20.4167, 20.6667, 67.0, "Dra"),
    band(11.3333, 12.0, 66.5, "Dra"),
    band(0.0, 0.3333, 66.0, "Cep"),
    band(14.0, 15.6667, 66.0, "UMi"),
    band(23.5833, 24.0, 66.0, "Cep"),
    band(12.0, 13.5, 64.0, "Dra"),
    band(13.5, 14.4167, 63.0, "Dra"),
    band(23.1667, 23.5833, 63.0, "Cep"),
    band(6.1, 7.0, 62.0, "Cam"),
    band(20.0, 20.4167, 61.5, "Dra"),
    band(20.5367, 20.6, 60.9167, "Cep"),
    band(7.0, 7.9667, 60.0, "Cam"),
    band(7.9667, 8.4167, 60.0, "UMa"),
    band(19.7667, 20.0, 59.5, "Dra"),
    band(20.0, 20.5367, 59.5, "Cep"),
    band(22.8667, 23.1667, 59.0833, "Cep"),
    band(0.0, 2.4333, 58.5, "Cas"),
    band(19.4167, 19.7667, 58.0, "Dra"),
    band(1.7, 1.9083, 57.5, "Cas"),
    band(2.4333, 3.1, 57.0, "Cas"),
    band(3.1, 3.1667, 57.0, "Cam"),
    band(22.3167, 22.8667, 56.25, "Cep"),
    band(5.0, 6.1, 56.0, "Cam"),
    band(14.0333, 14.4167, 55.5, "UMa"),
    band(14.4167, 19.4167, 55.5, "Dra"),
    band(3.1667, 3.3333, 55.0, "Cam"),
    band(22.1333, 22.3167, 55.0, "Cep"),
    band(20.6, 21.9667, 54.8333, "Cep"),
    band(0.0, 1.7, 54.0, "Cas"),
    band(6.1, 6.5, 54.0, "Lyn"),
    band(12.0833, 13.5, 53.0, "UMa"),
    band(15.25, 15.75, 53.0, "Dra"),
    band(21.9667, 22.1333, 52.75, "Cep"),
    band(3.3333, 5.0, 52.5, "Cam"),
    band(22.8667, 23.3333, 52.5, "Cas"),
    band(15.75, 17.0, 51.5, "Dra"),
    band(2.0417, 2.5167, 50.5, "Per"),
    band(17.0, 18.2333, 50.5, "Dra"),
    band(0.0, 1.3667, 50.0, "Cas"),
    band(1.3667, 1.6667, 50.0, "Per"),
    band(6.5, 6.8, 50.0, "Lyn"),
    band(23.3333, 24.0, 50.0, "Cas"),
    band(13.5, 14.0333, 48.5, "UMa"),
    band(0.0, 1.1167, 48.0, "Cas"),
    band(23.5833, 24.0, 48.0, "Cas"),
    band(18.175, 18.2333, 47.5, "Her"),
    band(18.2333, 19.0833, 47.5, "Dra"),
    band(19.0833, 19.1667, 47.5, "Cyg"),
    band(1.6667, 2.0417, 47.0, "Per"),
    band(8.4167, 9.1667, 47.0, "UMa"),
    band(0.1667, 0.8667, 46.0, "Cas"),
    band(12.0, 12.0833, 45.0, "UMa"),
    band(6.8, 7.3667, 44.5, "Lyn"),
    band(21.9083, 21.9667, 44.0, "Cyg"),
    band(21.875, 21.9083, 43.75, "Cyg"),
    band(19.1667, 19.4, 43.5, "Cyg"),
    band(9.1667, 10.1667, 42.0, "UMa"),
    band(10.1667, 10.7833, 40.0, "UMa"),
    band(15.4333, 15.75, 40.0, "Boo"),
    band(15.75, 16.3333, 40.0, "Her"),
    band(9.25, 9.5833, 39.75, "Lyn"),
    band(0.0, 2.5167, 36.75, "And"),
    band(2.5167, 2.5667, 36.75, "Per"),
    band(19.3583, 19.4, 36.5, "Lyr"),
    band(4.5, 4.6917, 36.0, "Per"),
    band(21.7333, 21.875, 36.0, "Cyg"),
    band(21.875, 22.0, 36.0, "Lac"),
    band(6.5333, 7.3667, 35.5, "Aur"),
    band(7.3667, 7.75, 35.5, "Lyn"),
    band(0.0, 2.0, 35.0, "And"),
    band(22.0, 22.8167, 35.0, "Lac"),
    band(22.8167, 22.8667, 34.5, "Lac"),
    band(22.8667, 23.5, 34.5, "And"),
    band(2.5667, 2.7167, 34.0, "Per"),
    band(10.7833, 11.0, 34.0, "UMa"),
    band(12.0, 12.3333, 34.0, "CVn"),
    band(7.75, 9.25, 33.5, "Lyn"),
    band(9.25, 9.8833, 33.5, "LMi"),
    band(0.7167, 1.4083, 33.0, "And"),
    band(15.1833, 15.4333, 33.0, "Boo"),
    band(23.5, 23.75, 32.0833, "And"),
    band(12.3333, 13.25, 32.0, "CVn"),
    band(23.75, 24.0, 31.3333, "And"),
    band(13.9583, 14.0333, 30.75, "CVn"),
    band(2.4167, 2.7167, 30.6667, "Tri"),
    band(2.7167, 4.5, 30.6667, "Per"),
    band(4.5, 4.75, 30.0, "Aur"),
    band(18.175, 19.3583, 30.0, "Lyr"),
    band(11.0, 12.0, 29.0, "UMa"),
    band(19.6667, 20.9167, 29.0, "Cyg"),
    band(4.75, 5.8833, 28.5, "Aur"),
    band(9.8833, 10.5, 28.5, "LMi"),
    band(13.25, 13.9583, 28.5, "CVn"),
    band(0.0, 0.0667, 28.0, "And"),
    band(1.4083, 1.6667, 28.0, "Tri"),
    band(5.8833, 6.5333, 28.0, "Aur"),
    band(7.8833, 8.0, 28.0, "Gem"),
    band(20.9167, 21.7333, 28.0, "Cyg"),
    band(19.2583, 19.6667, 27.5, "Cyg"),
    band(1.9167, 2.4167, 27.25, "Tri"),
    band(16.1667, 16.3333, 27.0, "CrB"),
    band(15.0833, 15.1833, 26.0, "Boo"),
    band(15.1833, 16.1667, 26.0, "CrB"),
    band(18.3667, 18.8667, 26.0, "Lyr"),
    band(10.75, 11.0, 25.5, "LMi"),
    band(18.8667, 19.2583, 25.5, "Lyr"),
    band(1.6667, 1.9167, 25.0, "Tri"),
    band(0.7167, 0.85, 23.75, "Psc"),
    band(10.5, 10.75, 23.5, "LMi"),
    band(21.25, 21.4167, 23.5, "Vul"),
    band(5.7, 5.8833, 22.8333, "Tau"),
    band(0.0667, 0.1417, 22.0, "And"),
    band(15.9167, 16.0333, 22.0, "Ser"),
    band(5.8833, 6.2167, 21.5, "Gem"),
    band(19.8333, 20.25, 21.25, "Vul"),
    band(18.8667, 19.25, 21.0833, "Vul"),
    band(0.1417, 0.85, 21.0, "And"),
    band(20.25, 20.5667, 20.5, "Vul"),
    band(7.8083, 7.8833, 20.0, "Gem"),
    band(20.5667, 21.25, 19.5, "Vul"),
    band(19.25, 19.8333, 19.1667, "Vul"),
    band(3.2833, 3.3667, 19.0, "Ari"),
    band(18.8667, 19.0, 18.5, "Sge"),
    band(5.7, 5.7667, 18.0, "Ori"),
    band(6.2167, 6.3083, 17.5, "Gem"),
    band(19.0, 19.8333, 16.1667, "Sge"),
    band(4.9667, 5.3333, 16.0, "Tau"),
    band(15.9167, 16.0833, 16.0, "Her"),
    band(19.8333, 20.25, 15.75, "Sge"),
    band(4.6167, 4.9667, 15.5, "Tau"),
    band(5.3333, 5.6, 15.5, "Tau"),
    band(12.8333, 13.5, 15.0, "Com"),
    band(17.25, 18.25, 14.3333, "Her"),
    band(11.8667, 12.8333, 14.0, "Com"),
    band(7.5, 7.8083, 13.5, "Gem"),
    band(16.75, 17.25, 12.8333, "Her"),
    band(0.0, 0.1417, 12.5, "Peg"),
    band(5.6, 5.7667, 12.5, "Tau"),
    band(7.0, 7.5, 12.5, "Gem"),
    band(21.1167, 21.3333, 12.5, "Peg"),
    band(6.3083, 6.9333, 12.0, "Gem"),
    band(18.25, 18.8667, 12.0, "Her"),
    band(20.875, 21.05, 11.8333, "Del"),
    band(21.05, 21.1167, 11.8333, "Peg"),
    band(11.5167, 11.8667, 11.0, "Leo"),
    band(6.2417, 6.3083, 10.0, "Ori"),
    band(6.9333, 7.0, 10.0, "Gem"),
    band(7.8083, 7.925, 10.0, "Cnc"),
    band(23.8333, 24.0, 10.0, "Peg"),
    band(1.6667, 3.2833, 9.9167, "Ari"),
    band(20.1417, 20.3, 8.5, "Del"),
    band(13.5, 15.0833, 8.0, "Boo"),
    band(22.75, 23.8333, 7.5, "Peg"),
    band(7.925, 9.25, 7.0, "Cnc"),
    band(9.25, 10.75, 7.0, "Leo"),
    band(18.25, 18.6622, 6.25, "Oph"),
    band(18.6622, 18.8667, 6.25, "Aql"),
    band(20.8333, 20.875, 6.0, "Del"),
    band(7.0, 7.0167, 5.5, "CMi"),
    band(18.25, 18.425, 4.5, "Ser"),
    band(16.0833, 16.75, 4.0, "Her"),
    band(18.25, 18.425, 3.0, "Oph"),
    band(21.4667, 21.6667, 2.75, "Peg"),
    band(0.0, 2.0, 2.0, "Psc"),
    band(18.5833, 18.8667, 2.0, "Ser"),
    band(20.3, 20.8333, 2.0, "Del"),
    band(20.8333, 21.3333, 2.0, "Equ"),
    band(21.3333, 21.4667, 2.0, "Peg"),
    band(22.0, 22.75, 2.0, "Peg"),
    band(21.6667, 22.0, 1.75, "Peg"),
    band(7.0167, 7.2, 1.5, "CMi"),
    band(3.5833, 4.6167, 0.0, "Tau"),
    band(4.6167, 4.6667, 0.0, "Ori"),
    band(7.2, 8.0833, 0.0, "CMi"),
    band(14.6667, 15.0833, 0.0, "Vir"),
    band(17.8333, 18.25, 0.0, "Oph"),
    band(2.65, 3.2833, -1.75, "Cet"),
    band(3.2833, 3.5833, -1.75, "Tau"),
    band(15.0833, 16.2667, -3.25, "Ser"),
    band(4.6667, 5.0833, -4.0, "Ori"),
    band(5.8333, 6.2417, -4.0, "Ori"),
    band(17.8333, 17.9667, -4.0, "Ser"),
    band(18.25, 18.5833, -4.0, "Ser"),
    band(18.5833, 18.8667, -4.0, "Aql"),
    band(22.75, 23.8333, -4.0, "Psc"),
    band(10.75, 11.5167, -6.0, "Leo"),
    band(11.5167, 11.8333, -6.0, "Vir"),
    band(0.0, 0.3333, -7.0, "Psc"),
    band(23.8333, 24.0, -7.0, "Psc"),
    band(14.25, 14.6667, -8.0, "Vir"),
    band(15.9167, 16.2667, -8.0, "Oph"),
    band(20.0, 20.5333, -9.0, "Aql"),
    band(21.3333, 21.8667, -9.0, "Aqr"),
    band(17.1667, 17.9667, -10.0, "Oph"),
    band(5.8333, 8.0833, -11.0, "Mon"),
    band(4.9167, 5.0833, -11.0, "Eri"),
    band(5.0833, 5.8333, -11.0, "Ori"),
    band(8.0833, 8.3667, -11.0, "Hya"),
    band(9.5833, 10.75, -11.0, "Sex"),
    band(11.8333, 12.8333, -11.0, "Vir"),
    band(17.5833, 17.6667, -11.6667, "Oph"),
    band(18.8667, 20.0, -12.0333, "Aql"),
    band(4.8333, 4.9167, -14.5, "Eri"),
    band(20.5333, 21.3333, -15.0, "Aqr"),
    band(17.1667, 18.25, -16.0, "Ser"),
    band(18.25, 18.8667, -16.0, "Sct"),
    band(8.3667, 8.5833, -17.0, "Hya"),
    band(16.2667, 16.375, -18.25, "Oph"),
    band(8.5833, 9.0833, -19.0, "Hya"),
    band(10.75, 10.8333, -19.0, "Crt"),
    band(16.2667, 16.375, -19.25, "Sco"),
    band(15.6667, 15.9167, -20.0, "Lib"),
    band(12.5833, 12.8333, -22.0, "Crv"),
    band(12.8333, 14.25, -22.0, "Vir"),
    band(9.0833, 9.75, -24.0, "Hya"),
    band(1.6667, 2.65, -24.3833, "Cet"),
    band(2.65, 3.75, -24.3833, "Eri"),
    band(10.8333, 11.8333, -24.5, "Crt"),
    band(11.8333, 12.5833, -24.5, "Crv"),
    band(14.25, 14.9167, -24.5, "Lib"),
    band(16.2667, 16.75, -24.5833, "Oph"),
    band(0.0, 1.6667, -25.5, "Cet"),
    band(21.3333, 21.8667, -25.5, "Cap"),
    band(21.8667, 23.8333, -25.5, "Aqr"),
    band(23.8333, 24.0, -25.5, "Cet"),
    band(9.75, 10.25, -26.5, "Hya"),
    band(4.7, 4.8333, -27.25, "Eri"),
    band(4.8333, 6.1167, -27.25, "Lep"),
    band(20.0, 21.3333, -28.0, "Cap"),
    band(10.25, 10.5833, -29.1667, "Hya"),
    band(12.5833, 14.9167, -29.5, "Hya"),
    band(14.9167, 15.6667, -29.5, "Lib"),
    band(15.6667, 16.0, -29.5, "Sco"),
    band(4.5833, 4.7, -30.0, "Eri"),
    band(16.75, 17.6, -30.0, "Oph"),
    band(17.6, 17.8333, -30.0, "Sgr"),
    band(10.5833, 10.8333, -31.1667, "Hya"),
    band(6.1167, 7.3667, -33.0, "CMa"),
    band(12.25, 12.5833, -33.0, "Hya"),
    band(10.8333, 12.25, -35.0, "Hya"),
    band(3.5, 3.75, -36.0, "For"),
    band(8.3667, 9.3667, -36.75, "Pyx"),
    band(4.2667, 4.5833, -37.0, "Eri"),
    band(17.8333, 19.1667, -37.0, "Sgr"),
    band(21.3333, 23.0, -37.0, "PsA"),
    band(23.0, 23.3333, -37.0, "Scl"),
    band(3.0, 3.5, -39.5833, "For"),
    band(9.3667, 11.0, -39.75, "Ant"),
    band(0.0, 1.6667, -40.0, "Scl"),
    band(1.6667, 3.0, -40.0, "For"),
    band(3.8667, 4.2667, -40.0, "Eri"),
    band(23.3333, 24.0, -40.0, "Scl"),
    band(14.1667, 14.9167, -42.0, "Cen"),
    band(15.6667, 16.0, -42.0, "Lup"),
    band(16.0, 16.4208, -42.0, "Sco"),
    band(4.8333, 5.0, -43.0, "Cae"),
    band(5.0, 6.5833, -43.0, "Col"),
    band(8.0, 8.3667, -43.0, "Pup"),
    band(3.4167, 3.8667, -44.0, "Eri"),
    band(16.4208, 17.8333, -45.5, "Sco"),
    band(17.8333, 19.1667, -45.5, "CrA"),
    band(19.1667, 20.3333, -45.5, "Sgr"),
    band(20.3333, 21.3333, -45.5, "Mic"),
    band(3.0, 3.4167, -46.0, "Eri"),
    band(4.5, 4.8333, -46.5, "Cae"),
    band(15.3333, 15.6667, -48.0, "Lup"),
    band(0.0, 2.3333, -48.1667, "Phe"),
    band(2.6667, 3.0, -49.0, "Eri"),
    band(4.0833, 4.2667, -49.0, "Hor"),
    band(4.2667, 4.5, -49.0, "Cae"),
    band(21.3333, 22.0, -50.0, "Gru"),
    band(6.0, 8.0, -50.75, "Pup"),
    band(8.0, 8.1667, -50.75, "Vel"),
    band(2.4167, 2.6667, -51.0, "Eri"),
    band(3.8333, 4.0833, -51.0, "Hor"),
    band(0.0, 1.8333, -51.5, "Phe"),
    band(6.0, 6.1667, -52.5, "Car"),
    band(8.1667, 8.45, -53.0, "Vel"),
    band(3.5, 3.8333, -53.1667, "Hor"),
    band(3.8333, 4.0, -53.1667, "Dor"),
    band(0.0, 1.5833, -53.5, "Phe"),
    band(2.1667, 2.4167, -54.0, "Eri"),
    band(4.5, 5.0, -54.0, "Pic"),
    band(15.05, 15.3333, -54.0, "Lup"),
    band(8.45, 8.8333, -54.5, "Vel"),
    band(6.1667, 6.5, -55.0, "Car"),
    band(11.8333, 12.8333, -55.0, "Cen"),
    band(14.1667, 15.05, -55.0, "Lup"),
    band(15.05, 15.3333, -55.0, "Nor"),
    band(4.0, 4.3333, -56.5, "Dor"),
    band(8.8333, 11.0, -56.5, "Vel"),
    band(11.0, 11.25, -56.5, "Cen"),
    band(17.5, 18.0, -57.0, "Ara"),
    band(18.0, 20.3333, -57.0, "Tel"),
    band(22.0, 23.3333, -57.0, "Gru"),
    band(3.2, 3.5, -57.5, "Hor"),
    band(5.0, 5.5, -57.5, "Pic"),
    band(6.5, 6.8333, -58.0, "Car"),
    band(0.0, 1.3333, -58.5, "Phe"),
    band(1.3333, 2.1667, -58.5, "Eri"),
    band(23.3333, 24.0, -58.5, "Phe"),
    band(4.3333, 4.5833, -59.0, "Dor"),
    band(15.3333, 16.4208, -60.0, "Nor"),
    band(20.3333, 21.3333, -60.0, "Ind"),
    band(5.5, 6.0, -61.0, "Pic"),
    band(15.1667, 15.3333, -61.0, "Cir"),
    band(16.4208, 16.5833, -61.0, "Ara"),
    band(14.9167, 15.1667, -63.5833, "Cir"),
    band(16.5833, 16.75, -63.5833, "Ara"),
    band(6.0, 6.8333, -64.0, "Pic"),
    band(6.8333, 9.0333, -64.0, "Car"),
    band(11.25, 11.8333, -64.0, "Cen"),
    band(11.8333, 12.8333, -64.0, "Cru"),
    band(12.8333, 14.5333, -64.0, "Cen"),
    band(13.5, 13.6667, -65.0, "Cir"),
    band(16.75, 16.8333, -65.0, "Ara"),
    band(2.1667, 3.2, -67.5, "Hor"),
    band(3.2, 4.5833, -67.5, "Ret"),
    band(14.75, 14.9167, -67.5, "Cir"),
    band(16.8333, 17.5, -67.5, "Ara"),
    band(17.5, 18.0, -67.5, "Pav"),
    band(22.0, 23.3333, -67.5, "Tuc"),
    band(4.5833, 6.5833, -70.0, "Dor"),
    band(13.6667, 14.75, -70.0, "Cir"),
    band(14.75, 17.0, -70.0, "TrA"),
    band(0.0, 1.3333, -75.0, "Tuc"),
    band(3.5, 4.5833, -75.0, "Hyi"),
    band(6.5833, 9.0333, -75.0, "Vol"),
    band(9.0333, 11.25, -75.0, "Car"),
    band(11.25, 13.6667, -75.0, "Mus"),
    band(18.0, 21.3333, -75.0, "Pav"),
    band(21.3333, 23.3333, -75.0, "Ind"),
    band(23.3333, 24.0, -75.0, "Tuc"),
    band(0.75, 1.3333, -76.0, "Tuc"),
    band(0.0, 3.5, -82.5, "Hyi"),
    band(7.6667, 13.6667, -82.5, "Cha"),
    band(13.6667, 18.0, -82.5, "Aps"),
    band(3.5, 7.6667, -85.0, "Men"),
    band(0.0, 24.0, -90.0, "Oct"),
];

static NAMES: &[(&str, &str)] = &[
    ("And", "Andromeda"),
    ("Ant", "Antlia"),
    ("Aps", "Apus"),
    ("Aql", "Aquila"),
    ("Aqr", "Aquarius"),
    ("Ara", "Ara"),
    ("Ari", "Aries"),
    ("Aur", "Auriga"),
    ("Boo", "Bootes"),
    ("CMa", "Canis Major"),
    ("CMi", "Canis Minor"),
    ("CVn", "Canes Venatici"),
    ("Cae", "Caelum"),
    ("Cam", "Camelopardalis"),
    ("Cap", "Capricornus"),
    ("Car", "Carina"),
    ("Cas", "Cassiopeia"),
    ("Cen", "Centaurus"),
    ("Cep", "Cepheus"),
    ("Cet", "Cetus"),
    ("Cha", "Chamaeleon"),
    ("Cir", "Circinus"),
    ("Cnc", "Cancer"),
    ("Col", "Columba"),
    ("Com", "Coma Berenices"),
    ("CrA", "Corona Australis"),
    ("CrB", "Corona Borealis"),
    ("Crt", "Crater"),
    ("Cru", "Crux"),
    ("Crv", "Corvus"),
    ("Cyg", "Cygnus"),
    ("Del", "Delphinus"),
    ("Dor", "Dorado"),
    ("Dra", "Draco"),
    ("Equ", "Equuleus"),
    ("Eri", "Eridanus"),
    ("For", "Fornax"),
    ("Gem", "Gemini"),
    ("Gru", "Grus"),
    ("Her", "Hercules"),
    ("Hor", "Horologium"),
    ("Hya", "Hydra"),
    ("Hyi", "Hydrus"),
    ("Ind", "Indus"),
    ("LMi", "Leo Minor"),
    ("Lac", "Lacerta"),
    ("Leo", "Leo"),
    ("Lep", "Lepus"),
    ("Lib", "Libra"),
    ("Lup", "Lupus"),
    ("Lyn", "Lynx"),
    ("Lyr", "Lyra"),
    ("Men", "Mensa"),
    ("Mic", "Microscopium"),
    ("Mon", "Monoceros"),
    ("Mus", "Musca"),
    ("Nor", "Norma"),
    ("Oct", "Octans"),
    ("Oph", "Ophiuchus"),
    ("Ori", "Orion"),
    ("Pav", "Pavo"),
    ("Peg", "Pegasus"),
    ("Per", "Perseus"),
    ("Phe", "Phoenix"),
    ("Pic", "Pictor"),
    ("PsA", "Piscis Austrinus"),
    ("Psc", "Pisces"),
    ("Pup", "Puppis"),
    ("Pyx", "Pyxis"),
    ("Ret", "Reticulum"),
    ("Scl", "Sculptor"),
    ("Sco", "Scorpius"),
    ("Sct", "Scutum"),
    ("Ser", "Serpens"),
    ("Sex", "Sextans"),
    ("Sge", "Sagitta"),
    ("Sgr", "Sagittarius"),
    ("Tau", "Taurus"),
    ("Tel", "Telescopium"),
    ("TrA", "Triangulum Australe"),
    ("Tri", "Triangulum"),
    ("Tuc", "Tucana"),
    ("UMa", "Ursa Major"),
    ("UMi", "Ursa Minor"),
    ("Vel", "Vela"),
    ("Vir", "Virgo"),
    ("Vol", "Volans"),
    ("Vul", "Vulpecula"),
];

fn full_name(code: &str) -> &'static str {
    NAMES
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, name)| *name)
        .unwrap_or("Unknown")
}

/// Precess J2000 right ascension (hours) and declination (degrees) to B1875.0.
fn to_b1875(ra_hours: f64, dec_deg: f64) -> (f64, f64) {
    let (sin_ra, cos_ra) = (ra_hours * 15.0).to_radians().sin_cos();
    let (sin_dec, cos_dec) = dec_deg.to_radians().sin_cos();

    let epoch = JulianDate::new(B1875_JD);
    let [x, y, z] =
        precession_matrix_iau2006(epoch).apply_array([cos_dec * cos_ra, cos_dec * sin_ra, sin_dec]);

    let ra = y.atan2(x).to_degrees().rem_euclid(360.0) / 15.0;
    let dec = z.clamp(-1.0, 1.0).asin().to_degrees();
    (ra, dec)
}

/// Resolve the constellation containing a J2000 right ascension (hours) and
/// declination (degrees).
pub fn lookup(ra_hours: f64, dec_deg: f64) -> ConstellationInfo {
    let (ra, dec) = to_b1875(ra_hours.rem_euclid(24.0), dec_deg.clamp(-90.0, 90.0));

    // The last band covers the whole south polar cap; only non-finite input misses every band.
    let code = BANDS
        .iter()
        .find(|b| dec >= b.dec_low && b.ra_low <= ra && ra < b.ra_high)
        .map(|b| b.code)
        .unwrap_or("Oct");

    ConstellationInfo {
        code: code.to_string(),
        name: full_name(code).to_string(),
    }
}
