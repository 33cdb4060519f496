//! Student-t 95% quantile lookup.
//!
//! 95% quantiles of the Student-t distribution for 1 to 1000 degrees of
//! freedom. Beyond 1000 the quantile has converged to well within the
//! table's six printed decimals, so lookups clamp to the last entry.

/// 95% Student-t quantiles, indexed by degrees of freedom minus one.
#[rustfmt::skip]
const QUANTILE95_TABLE: [f64; 1000] = [
    6.313752, 2.919986, 2.353363, 2.131847, 2.015048, 1.943180, 1.894579, 1.859548,
    1.833113, 1.812461, 1.795885, 1.782288, 1.770933, 1.761310, 1.753050, 1.745884,
    1.739607, 1.734064, 1.729133, 1.724718, 1.720743, 1.717144, 1.713872, 1.710882,
    1.708141, 1.705618, 1.703288, 1.701131, 1.699127, 1.697261, 1.695519, 1.693889,
    1.692360, 1.690924, 1.689572, 1.688298, 1.687094, 1.685954, 1.684875, 1.683851,
    1.682878, 1.681952, 1.681071, 1.680230, 1.679427, 1.678660, 1.677927, 1.677224,
    1.676551, 1.675905, 1.675285, 1.674689, 1.674116, 1.673565, 1.673034, 1.672522,
    1.672029, 1.671553, 1.671093, 1.670649, 1.670219, 1.669804, 1.669402, 1.669013,
    1.668636, 1.668271, 1.667916, 1.667572, 1.667239, 1.666914, 1.666600, 1.666294,
    1.665996, 1.665707, 1.665425, 1.665151, 1.664885, 1.664625, 1.664371, 1.664125,
    1.663884, 1.663649, 1.663420, 1.663197, 1.662978, 1.662765, 1.662557, 1.662354,
    1.662155, 1.661961, 1.661771, 1.661585, 1.661404, 1.661226, 1.661052, 1.660881,
    1.660715, 1.660551, 1.660391, 1.660234, 1.660081, 1.659930, 1.659782, 1.659637,
    1.659495, 1.659356, 1.659219, 1.659085, 1.658953, 1.658824, 1.658697, 1.658573,
    1.658450, 1.658330, 1.658212, 1.658096, 1.657982, 1.657870, 1.657759, 1.657651,
    1.657544, 1.657439, 1.657336, 1.657235, 1.657135, 1.657037, 1.656940, 1.656845,
    1.656752, 1.656659, 1.656569, 1.656479, 1.656391, 1.656305, 1.656219, 1.656135,
    1.656052, 1.655970, 1.655890, 1.655811, 1.655732, 1.655655, 1.655579, 1.655504,
    1.655430, 1.655357, 1.655285, 1.655215, 1.655145, 1.655076, 1.655007, 1.654940,
    1.654874, 1.654808, 1.654744, 1.654680, 1.654617, 1.654555, 1.654494, 1.654433,
    1.654373, 1.654314, 1.654256, 1.654198, 1.654141, 1.654085, 1.654029, 1.653974,
    1.653920, 1.653866, 1.653813, 1.653761, 1.653709, 1.653658, 1.653607, 1.653557,
    1.653508, 1.653459, 1.653411, 1.653363, 1.653316, 1.653269, 1.653223, 1.653177,
    1.653132, 1.653087, 1.653043, 1.652999, 1.652956, 1.652913, 1.652871, 1.652829,
    1.652787, 1.652746, 1.652705, 1.652665, 1.652625, 1.652586, 1.652547, 1.652508,
    1.652470, 1.652432, 1.652394, 1.652357, 1.652321, 1.652284, 1.652248, 1.652212,
    1.652177, 1.652142, 1.652107, 1.652073, 1.652039, 1.652005, 1.651972, 1.651939,
    1.651906, 1.651873, 1.651841, 1.651809, 1.651778, 1.651746, 1.651715, 1.651685,
    1.651654, 1.651624, 1.651594, 1.651564, 1.651535, 1.651506, 1.651477, 1.651448,
    1.651420, 1.651391, 1.651364, 1.651336, 1.651308, 1.651281, 1.651254, 1.651227,
    1.651201, 1.651175, 1.651148, 1.651123, 1.651097, 1.651071, 1.651046, 1.651021,
    1.650996, 1.650971, 1.650947, 1.650923, 1.650899, 1.650875, 1.650851, 1.650828,
    1.650804, 1.650781, 1.650758, 1.650735, 1.650713, 1.650690, 1.650668, 1.650646,
    1.650624, 1.650602, 1.650581, 1.650559, 1.650538, 1.650517, 1.650496, 1.650475,
    1.650454, 1.650434, 1.650413, 1.650393, 1.650373, 1.650353, 1.650333, 1.650314,
    1.650294, 1.650275, 1.650256, 1.650237, 1.650218, 1.650199, 1.650180, 1.650162,
    1.650143, 1.650125, 1.650107, 1.650089, 1.650071, 1.650053, 1.650035, 1.650018,
    1.650000, 1.649983, 1.649966, 1.649949, 1.649932, 1.649915, 1.649898, 1.649881,
    1.649865, 1.649848, 1.649832, 1.649816, 1.649800, 1.649784, 1.649768, 1.649752,
    1.649736, 1.649721, 1.649705, 1.649690, 1.649675, 1.649659, 1.649644, 1.649629,
    1.649614, 1.649600, 1.649585, 1.649570, 1.649556, 1.649541, 1.649527, 1.649512,
    1.649498, 1.649484, 1.649470, 1.649456, 1.649442, 1.649429, 1.649415, 1.649401,
    1.649388, 1.649374, 1.649361, 1.649348, 1.649334, 1.649321, 1.649308, 1.649295,
    1.649282, 1.649269, 1.649257, 1.649244, 1.649231, 1.649219, 1.649206, 1.649194,
    1.649182, 1.649169, 1.649157, 1.649145, 1.649133, 1.649121, 1.649109, 1.649097,
    1.649086, 1.649074, 1.649062, 1.649051, 1.649039, 1.649028, 1.649016, 1.649005,
    1.648994, 1.648982, 1.648971, 1.648960, 1.648949, 1.648938, 1.648927, 1.648916,
    1.648905, 1.648895, 1.648884, 1.648873, 1.648863, 1.648852, 1.648842, 1.648831,
    1.648821, 1.648811, 1.648801, 1.648790, 1.648780, 1.648770, 1.648760, 1.648750,
    1.648740, 1.648730, 1.648720, 1.648711, 1.648701, 1.648691, 1.648682, 1.648672,
    1.648662, 1.648653, 1.648643, 1.648634, 1.648625, 1.648615, 1.648606, 1.648597,
    1.648588, 1.648579, 1.648570, 1.648560, 1.648551, 1.648543, 1.648534, 1.648525,
    1.648516, 1.648507, 1.648498, 1.648490, 1.648481, 1.648472, 1.648464, 1.648455,
    1.648447, 1.648438, 1.648430, 1.648422, 1.648413, 1.648405, 1.648397, 1.648388,
    1.648380, 1.648372, 1.648364, 1.648356, 1.648348, 1.648340, 1.648332, 1.648324,
    1.648316, 1.648308, 1.648301, 1.648293, 1.648285, 1.648277, 1.648270, 1.648262,
    1.648254, 1.648247, 1.648239, 1.648232, 1.648224, 1.648217, 1.648209, 1.648202,
    1.648195, 1.648187, 1.648180, 1.648173, 1.648166, 1.648158, 1.648151, 1.648144,
    1.648137, 1.648130, 1.648123, 1.648116, 1.648109, 1.648102, 1.648095, 1.648088,
    1.648081, 1.648075, 1.648068, 1.648061, 1.648054, 1.648048, 1.648041, 1.648034,
    1.648028, 1.648021, 1.648015, 1.648008, 1.648001, 1.647995, 1.647989, 1.647982,
    1.647976, 1.647969, 1.647963, 1.647957, 1.647950, 1.647944, 1.647938, 1.647932,
    1.647925, 1.647919, 1.647913, 1.647907, 1.647901, 1.647895, 1.647889, 1.647883,
    1.647877, 1.647871, 1.647865, 1.647859, 1.647853, 1.647847, 1.647841, 1.647835,
    1.647829, 1.647824, 1.647818, 1.647812, 1.647806, 1.647801, 1.647795, 1.647789,
    1.647784, 1.647778, 1.647772, 1.647767, 1.647761, 1.647756, 1.647750, 1.647745,
    1.647739, 1.647734, 1.647728, 1.647723, 1.647717, 1.647712, 1.647707, 1.647701,
    1.647696, 1.647691, 1.647686, 1.647680, 1.647675, 1.647670, 1.647665, 1.647659,
    1.647654, 1.647649, 1.647644, 1.647639, 1.647634, 1.647629, 1.647624, 1.647619,
    1.647614, 1.647609, 1.647604, 1.647599, 1.647594, 1.647589, 1.647584, 1.647579,
    1.647574, 1.647569, 1.647565, 1.647560, 1.647555, 1.647550, 1.647545, 1.647541,
    1.647536, 1.647531, 1.647527, 1.647522, 1.647517, 1.647513, 1.647508, 1.647503,
    1.647499, 1.647494, 1.647490, 1.647485, 1.647481, 1.647476, 1.647471, 1.647467,
    1.647463, 1.647458, 1.647454, 1.647449, 1.647445, 1.647440, 1.647436, 1.647432,
    1.647427, 1.647423, 1.647419, 1.647414, 1.647410, 1.647406, 1.647401, 1.647397,
    1.647393, 1.647389, 1.647385, 1.647380, 1.647376, 1.647372, 1.647368, 1.647364,
    1.647360, 1.647355, 1.647351, 1.647347, 1.647343, 1.647339, 1.647335, 1.647331,
    1.647327, 1.647323, 1.647319, 1.647315, 1.647311, 1.647307, 1.647303, 1.647299,
    1.647295, 1.647291, 1.647287, 1.647284, 1.647280, 1.647276, 1.647272, 1.647268,
    1.647264, 1.647261, 1.647257, 1.647253, 1.647249, 1.647245, 1.647242, 1.647238,
    1.647234, 1.647231, 1.647227, 1.647223, 1.647219, 1.647216, 1.647212, 1.647209,
    1.647205, 1.647201, 1.647198, 1.647194, 1.647190, 1.647187, 1.647183, 1.647180,
    1.647176, 1.647173, 1.647169, 1.647166, 1.647162, 1.647159, 1.647155, 1.647152,
    1.647148, 1.647145, 1.647141, 1.647138, 1.647134, 1.647131, 1.647128, 1.647124,
    1.647121, 1.647118, 1.647114, 1.647111, 1.647107, 1.647104, 1.647101, 1.647098,
    1.647094, 1.647091, 1.647088, 1.647084, 1.647081, 1.647078, 1.647075, 1.647071,
    1.647068, 1.647065, 1.647062, 1.647059, 1.647055, 1.647052, 1.647049, 1.647046,
    1.647043, 1.647040, 1.647036, 1.647033, 1.647030, 1.647027, 1.647024, 1.647021,
    1.647018, 1.647015, 1.647012, 1.647009, 1.647006, 1.647003, 1.647000, 1.646997,
    1.646994, 1.646991, 1.646988, 1.646985, 1.646982, 1.646979, 1.646976, 1.646973,
    1.646970, 1.646967, 1.646964, 1.646961, 1.646958, 1.646955, 1.646952, 1.646949,
    1.646947, 1.646944, 1.646941, 1.646938, 1.646935, 1.646932, 1.646929, 1.646927,
    1.646924, 1.646921, 1.646918, 1.646915, 1.646913, 1.646910, 1.646907, 1.646904,
    1.646902, 1.646899, 1.646896, 1.646893, 1.646891, 1.646888, 1.646885, 1.646882,
    1.646880, 1.646877, 1.646874, 1.646872, 1.646869, 1.646866, 1.646864, 1.646861,
    1.646858, 1.646856, 1.646853, 1.646851, 1.646848, 1.646845, 1.646843, 1.646840,
    1.646838, 1.646835, 1.646832, 1.646830, 1.646827, 1.646825, 1.646822, 1.646820,
    1.646817, 1.646815, 1.646812, 1.646810, 1.646807, 1.646805, 1.646802, 1.646800,
    1.646797, 1.646795, 1.646792, 1.646790, 1.646787, 1.646785, 1.646782, 1.646780,
    1.646777, 1.646775, 1.646773, 1.646770, 1.646768, 1.646765, 1.646763, 1.646761,
    1.646758, 1.646756, 1.646753, 1.646751, 1.646749, 1.646746, 1.646744, 1.646742,
    1.646739, 1.646737, 1.646735, 1.646732, 1.646730, 1.646728, 1.646725, 1.646723,
    1.646721, 1.646719, 1.646716, 1.646714, 1.646712, 1.646709, 1.646707, 1.646705,
    1.646703, 1.646700, 1.646698, 1.646696, 1.646694, 1.646692, 1.646689, 1.646687,
    1.646685, 1.646683, 1.646681, 1.646678, 1.646676, 1.646674, 1.646672, 1.646670,
    1.646667, 1.646665, 1.646663, 1.646661, 1.646659, 1.646657, 1.646655, 1.646653,
    1.646650, 1.646648, 1.646646, 1.646644, 1.646642, 1.646640, 1.646638, 1.646636,
    1.646634, 1.646632, 1.646629, 1.646627, 1.646625, 1.646623, 1.646621, 1.646619,
    1.646617, 1.646615, 1.646613, 1.646611, 1.646609, 1.646607, 1.646605, 1.646603,
    1.646601, 1.646599, 1.646597, 1.646595, 1.646593, 1.646591, 1.646589, 1.646587,
    1.646585, 1.646583, 1.646581, 1.646579, 1.646577, 1.646575, 1.646573, 1.646571,
    1.646569, 1.646568, 1.646566, 1.646564, 1.646562, 1.646560, 1.646558, 1.646556,
    1.646554, 1.646552, 1.646550, 1.646548, 1.646547, 1.646545, 1.646543, 1.646541,
    1.646539, 1.646537, 1.646535, 1.646534, 1.646532, 1.646530, 1.646528, 1.646526,
    1.646524, 1.646522, 1.646521, 1.646519, 1.646517, 1.646515, 1.646513, 1.646512,
    1.646510, 1.646508, 1.646506, 1.646504, 1.646503, 1.646501, 1.646499, 1.646497,
    1.646495, 1.646494, 1.646492, 1.646490, 1.646488, 1.646487, 1.646485, 1.646483,
    1.646481, 1.646480, 1.646478, 1.646476, 1.646475, 1.646473, 1.646471, 1.646469,
    1.646468, 1.646466, 1.646464, 1.646463, 1.646461, 1.646459, 1.646457, 1.646456,
    1.646454, 1.646452, 1.646451, 1.646449, 1.646447, 1.646446, 1.646444, 1.646442,
    1.646441, 1.646439, 1.646437, 1.646436, 1.646434, 1.646433, 1.646431, 1.646429,
    1.646428, 1.646426, 1.646424, 1.646423, 1.646421, 1.646420, 1.646418, 1.646416,
    1.646415, 1.646413, 1.646412, 1.646410, 1.646408, 1.646407, 1.646405, 1.646404,
    1.646402, 1.646400, 1.646399, 1.646397, 1.646396, 1.646394, 1.646393, 1.646391,
    1.646390, 1.646388, 1.646386, 1.646385, 1.646383, 1.646382, 1.646380, 1.646379,
];

/// Look up the 95% Student-t quantile for the given degrees of freedom.
///
/// The table is monotone non-increasing in `degrees_of_freedom`. Degrees of
/// freedom beyond the table range clamp to the last (converged) entry; a
/// degenerate value of zero clamps to one.
pub fn quantile95(degrees_of_freedom: usize) -> f64 {
    let index = degrees_of_freedom.max(1) - 1;
    QUANTILE95_TABLE[index.min(QUANTILE95_TABLE.len() - 1)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use statrs::distribution::{ContinuousCDF, StudentsT};

    #[test]
    fn test_known_quantiles() {
        assert_relative_eq!(quantile95(1), 6.313752, max_relative = 1e-6);
        assert_relative_eq!(quantile95(2), 2.919986, max_relative = 1e-6);
        assert_relative_eq!(quantile95(10), 1.812461, max_relative = 1e-6);
        assert_relative_eq!(quantile95(1000), 1.646379, max_relative = 1e-6);
    }

    #[test]
    fn test_clamps_beyond_table() {
        assert_eq!(quantile95(1001), quantile95(1000));
        assert_eq!(quantile95(1_000_000), quantile95(1000));
        // df 0 only arises for a single-repetition outermost level; clamp
        // rather than panic.
        assert_eq!(quantile95(0), quantile95(1));
    }

    #[test]
    fn test_monotone_non_increasing() {
        for df in 1..1000 {
            assert!(quantile95(df) >= quantile95(df + 1), "df = {df}");
        }
    }

    #[test]
    fn test_agrees_with_statrs() {
        for df in [1usize, 2, 5, 10, 30, 100, 500, 1000] {
            let dist = StudentsT::new(0.0, 1.0, df as f64).unwrap();
            let expected = dist.inverse_cdf(0.95);
            assert_relative_eq!(quantile95(df), expected, max_relative = 1e-5);
        }
    }
}
