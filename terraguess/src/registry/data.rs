//! Static country-to-capital reference table.
//!
//! Each entry maps a canonical country name to its capital's
//! coordinates in decimal degrees (latitude, longitude). The table is
//! the authoritative list of guessable countries; lookups elsewhere are
//! case-insensitive against these names.

/// (country name, capital latitude, capital longitude)
pub(super) const COUNTRY_CAPITALS: &[(&str, f64, f64)] = &[
    ("Afghanistan", 34.53, 69.17),
    ("Albania", 41.33, 19.82),
    ("Algeria", 36.75, 3.04),
    ("Argentina", -34.60, -58.38),
    ("Armenia", 40.18, 44.51),
    ("Australia", -35.28, 149.13),
    ("Austria", 48.21, 16.37),
    ("Azerbaijan", 40.41, 49.87),
    ("Bangladesh", 23.81, 90.41),
    ("Belarus", 53.90, 27.57),
    ("Belgium", 50.85, 4.35),
    ("Bolivia", -16.49, -68.12),
    ("Bosnia and Herzegovina", 43.86, 18.41),
    ("Botswana", -24.63, 25.92),
    ("Brazil", -15.79, -47.88),
    ("Bulgaria", 42.70, 23.32),
    ("Cambodia", 11.56, 104.92),
    ("Cameroon", 3.85, 11.50),
    ("Canada", 45.42, -75.70),
    ("Chile", -33.45, -70.67),
    ("China", 39.90, 116.41),
    ("Colombia", 4.71, -74.07),
    ("Costa Rica", 9.93, -84.08),
    ("Croatia", 45.81, 15.98),
    ("Cuba", 23.11, -82.37),
    ("Cyprus", 35.19, 33.38),
    ("Czech Republic", 50.08, 14.44),
    ("Denmark", 55.68, 12.57),
    ("Dominican Republic", 18.49, -69.93),
    ("Ecuador", -0.18, -78.47),
    ("Egypt", 30.04, 31.24),
    ("El Salvador", 13.69, -89.22),
    ("Estonia", 59.44, 24.75),
    ("Ethiopia", 9.03, 38.74),
    ("Finland", 60.17, 24.94),
    ("France", 48.86, 2.35),
    ("Georgia", 41.72, 44.83),
    ("Germany", 52.52, 13.40),
    ("Ghana", 5.60, -0.19),
    ("Greece", 37.98, 23.73),
    ("Guatemala", 14.63, -90.51),
    ("Honduras", 14.07, -87.19),
    ("Hungary", 47.50, 19.04),
    ("Iceland", 64.15, -21.94),
    ("India", 28.61, 77.21),
    ("Indonesia", -6.21, 106.85),
    ("Iran", 35.69, 51.39),
    ("Iraq", 33.31, 44.37),
    ("Ireland", 53.35, -6.26),
    ("Israel", 31.77, 35.21),
    ("Italy", 41.90, 12.50),
    ("Jamaica", 18.02, -76.80),
    ("Japan", 35.68, 139.69),
    ("Jordan", 31.95, 35.93),
    ("Kazakhstan", 51.17, 71.45),
    ("Kenya", -1.29, 36.82),
    ("Kuwait", 29.38, 47.99),
    ("Kyrgyzstan", 42.87, 74.59),
    ("Laos", 17.98, 102.63),
    ("Latvia", 56.95, 24.11),
    ("Lebanon", 33.89, 35.50),
    ("Libya", 32.89, 13.19),
    ("Lithuania", 54.69, 25.28),
    ("Luxembourg", 49.61, 6.13),
    ("Madagascar", -18.88, 47.51),
    ("Malaysia", 3.14, 101.69),
    ("Mali", 12.64, -8.00),
    ("Malta", 35.90, 14.51),
    ("Mexico", 19.43, -99.13),
    ("Moldova", 47.01, 28.86),
    ("Mongolia", 47.89, 106.91),
    ("Montenegro", 42.43, 19.26),
    ("Morocco", 34.02, -6.84),
    ("Mozambique", -25.97, 32.57),
    ("Myanmar", 19.76, 96.08),
    ("Namibia", -22.56, 17.08),
    ("Nepal", 27.72, 85.32),
    ("Netherlands", 52.37, 4.90),
    ("New Zealand", -41.29, 174.78),
    ("Nicaragua", 12.11, -86.24),
    ("Nigeria", 9.08, 7.40),
    ("North Macedonia", 41.99, 21.43),
    ("Norway", 59.91, 10.75),
    ("Oman", 23.59, 58.41),
    ("Pakistan", 33.69, 73.04),
    ("Panama", 8.98, -79.52),
    ("Paraguay", -25.26, -57.58),
    ("Peru", -12.05, -77.04),
    ("Philippines", 14.60, 120.98),
    ("Poland", 52.23, 21.01),
    ("Portugal", 38.72, -9.14),
    ("Qatar", 25.29, 51.53),
    ("Romania", 44.43, 26.10),
    ("Russia", 55.76, 37.62),
    ("Saudi Arabia", 24.71, 46.68),
    ("Senegal", 14.72, -17.47),
    ("Serbia", 44.79, 20.45),
    ("Singapore", 1.35, 103.82),
    ("Slovakia", 48.15, 17.11),
    ("Slovenia", 46.06, 14.51),
    ("South Africa", -25.75, 28.19),
    ("South Korea", 37.57, 126.98),
    ("Spain", 40.42, -3.70),
    ("Sri Lanka", 6.93, 79.86),
    ("Sweden", 59.33, 18.07),
    ("Switzerland", 46.95, 7.45),
    ("Taiwan", 25.03, 121.57),
    ("Tanzania", -6.16, 35.75),
    ("Thailand", 13.76, 100.50),
    ("Tunisia", 36.81, 10.18),
    ("Turkey", 39.93, 32.86),
    ("Uganda", 0.35, 32.58),
    ("Ukraine", 50.45, 30.52),
    ("United Arab Emirates", 24.45, 54.38),
    ("United Kingdom", 51.51, -0.13),
    ("United States", 38.91, -77.04),
    ("Uruguay", -34.90, -56.16),
    ("Uzbekistan", 41.30, 69.24),
    ("Venezuela", 10.48, -66.90),
    ("Vietnam", 21.03, 105.85),
    ("Zambia", -15.39, 28.32),
    ("Zimbabwe", -17.83, 31.05),
];
