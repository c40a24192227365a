/// Airports known to the embedded table: `(IATA code, latitude, longitude)` in decimal degrees.
///
/// Sorted by code. Covers the major US airports found in the on-time performance data.
pub(crate) const AIRPORT_COORDS: &[(&str, f64, f64)] = &[
    ("ABQ", 35.0433, -106.6129),
    ("ALB", 42.7483, -73.8017),
    ("ANC", 61.1743, -149.9962),
    ("ATL", 33.6407, -84.4277),
    ("AUS", 30.1975, -97.6664),
    ("BDL", 41.9389, -72.6832),
    ("BHM", 33.5629, -86.7535),
    ("BNA", 36.1263, -86.6774),
    ("BOI", 43.5644, -116.2228),
    ("BOS", 42.3656, -71.0096),
    ("BUF", 42.9405, -78.7322),
    ("BUR", 34.2007, -118.3587),
    ("BWI", 39.1774, -76.6684),
    ("CLE", 41.4117, -81.8498),
    ("CLT", 35.2144, -80.9473),
    ("CMH", 39.9980, -82.8919),
    ("CVG", 39.0488, -84.6678),
    ("DAL", 32.8471, -96.8518),
    ("DCA", 38.8512, -77.0402),
    ("DEN", 39.8561, -104.6737),
    ("DFW", 32.8998, -97.0403),
    ("DTW", 42.2162, -83.3554),
    ("ELP", 31.8072, -106.3776),
    ("EWR", 40.6895, -74.1745),
    ("FLL", 26.0742, -80.1506),
    ("GEG", 47.6199, -117.5338),
    ("HNL", 21.3187, -157.9225),
    ("HOU", 29.6454, -95.2789),
    ("IAD", 38.9531, -77.4565),
    ("IAH", 29.9902, -95.3368),
    ("IND", 39.7173, -86.2944),
    ("JAX", 30.4941, -81.6879),
    ("JFK", 40.6413, -73.7781),
    ("LAS", 36.0840, -115.1537),
    ("LAX", 33.9416, -118.4085),
    ("LGA", 40.7769, -73.8740),
    ("LIT", 34.7294, -92.2243),
    ("MCI", 39.2976, -94.7139),
    ("MCO", 28.4312, -81.3081),
    ("MDW", 41.7868, -87.7522),
    ("MEM", 35.0421, -89.9792),
    ("MIA", 25.7959, -80.2870),
    ("MKE", 42.9476, -87.8966),
    ("MSP", 44.8848, -93.2223),
    ("MSY", 29.9934, -90.2580),
    ("OAK", 37.7126, -122.2197),
    ("OGG", 20.8986, -156.4305),
    ("OKC", 35.3931, -97.6007),
    ("OMA", 41.3032, -95.8941),
    ("ONT", 34.0560, -117.6012),
    ("ORD", 41.9742, -87.9073),
    ("ORF", 36.8946, -76.2012),
    ("PBI", 26.6832, -80.0956),
    ("PDX", 45.5898, -122.5951),
    ("PHL", 39.8744, -75.2424),
    ("PHX", 33.4342, -112.0116),
    ("PIT", 40.4915, -80.2329),
    ("PVD", 41.7240, -71.4282),
    ("RDU", 35.8801, -78.7880),
    ("RIC", 37.5052, -77.3197),
    ("RNO", 39.4991, -119.7681),
    ("RSW", 26.5362, -81.7552),
    ("SAN", 32.7338, -117.1933),
    ("SAT", 29.5337, -98.4698),
    ("SDF", 38.1744, -85.7360),
    ("SEA", 47.4502, -122.3088),
    ("SFO", 37.6213, -122.3790),
    ("SJC", 37.3639, -121.9289),
    ("SLC", 40.7899, -111.9791),
    ("SMF", 38.6954, -121.5908),
    ("SNA", 33.6762, -117.8675),
    ("STL", 38.7487, -90.3700),
    ("TPA", 27.9755, -82.5332),
    ("TUL", 36.1984, -95.8881),
    ("TUS", 32.1161, -110.9410),
];
