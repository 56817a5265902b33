//! US Navy Diving Manual Revision 7 air tables, fsw and minutes throughout.
//!
//! Values follow the Rev 7 layout but are approximate, not the published
//! figures. Load the authoritative tables with
//! [`ReferenceTables::load_from_path`] for operational planning.

use crate::models::GroupLetter::{self, *};
use crate::models::{
    AltitudeFactor, DecoDepth, DecoEntry, DecoStop, DepthClass, GroupRange, IntervalRange,
    ResidualNitrogenEntry, ResidualNitrogenRow, SafetyRules, SurfaceIntervalRule,
    UNLIMITED_MINUTES,
};

use super::ReferenceTables;

const NO_FLY_HOURS_NO_DECOMPRESSION: u32 = 12;
const NO_FLY_HOURS_DECOMPRESSION: u32 = 24;

pub(super) fn build() -> ReferenceTables {
    ReferenceTables {
        safety: SafetyRules {
            no_fly_hours_no_decompression: NO_FLY_HOURS_NO_DECOMPRESSION,
            no_fly_hours_decompression: NO_FLY_HOURS_DECOMPRESSION,
        },
        depth_classes: NO_DECOMPRESSION
            .iter()
            .map(|&(depth_ft, ndl, bounds)| depth_class(depth_ft, ndl, bounds))
            .collect(),
        decompression: AIR_DECOMPRESSION
            .iter()
            .map(|&(depth_ft, rows)| DecoDepth {
                depth_ft,
                entries: rows
                    .iter()
                    .map(|&(bottom_time_min, stops, final_group)| DecoEntry {
                        bottom_time_min,
                        stops: stops
                            .iter()
                            .map(|&(depth_ft, minutes)| DecoStop { depth_ft, minutes })
                            .collect(),
                        final_group,
                    })
                    .collect(),
            })
            .collect(),
        surface_intervals: SURFACE_INTERVAL
            .iter()
            .map(|&(group, ranges)| SurfaceIntervalRule {
                group,
                ranges: ranges
                    .iter()
                    .map(|&(from_min, to_min, group)| IntervalRange {
                        from_min,
                        to_min,
                        group,
                    })
                    .collect(),
            })
            .collect(),
        residual_nitrogen: RESIDUAL_NITROGEN
            .iter()
            .map(|&(group, depths)| ResidualNitrogenRow {
                group,
                depths: depths
                    .iter()
                    .map(|&(depth_ft, minutes)| ResidualNitrogenEntry { depth_ft, minutes })
                    .collect(),
            })
            .collect(),
        altitude_factors: ALTITUDE_CORRECTION
            .iter()
            .map(|&(altitude_ft, factor)| AltitudeFactor {
                altitude_ft,
                factor,
            })
            .collect(),
    }
}

/// Expands upper bounds into contiguous ranges starting at zero minutes.
fn depth_class(depth_ft: f64, ndl: u32, bounds: &[u32]) -> DepthClass {
    let mut from_min = 0;
    let groups = bounds
        .iter()
        .zip(GroupLetter::ALL)
        .map(|(&to_min, group)| {
            let range = GroupRange {
                from_min,
                to_min,
                group,
            };
            from_min = to_min.saturating_add(1);
            range
        })
        .collect();
    DepthClass {
        depth_ft,
        no_decompression_limit_min: ndl,
        groups,
    }
}

/// Table 9-7: depth class (fsw), no-decompression limit (min) and the
/// inclusive upper bottom-time bound of each repetitive group, starting at `A`.
/// A group column past `O` is `Z`.
#[rustfmt::skip]
const NO_DECOMPRESSION: &[(f64, u32, &[u32])] = &[
    (10.0, UNLIMITED_MINUTES, &[57, 101, 158, 245, 426, UNLIMITED_MINUTES]),
    (15.0, UNLIMITED_MINUTES, &[36, 60, 88, 121, 163, 217, 297, 449, UNLIMITED_MINUTES]),
    (20.0, UNLIMITED_MINUTES, &[26, 43, 61, 82, 106, 133, 165, 205, 256, 330, 461, UNLIMITED_MINUTES]),
    (25.0, 1102, &[20, 33, 47, 62, 78, 97, 117, 140, 166, 198, 236, 285, 354, 469, 992, 1102]),
    (30.0, 371, &[17, 27, 38, 50, 62, 76, 91, 107, 125, 145, 167, 193, 223, 260, 307, 371]),
    (35.0, 232, &[14, 23, 32, 42, 52, 63, 74, 87, 100, 115, 131, 148, 168, 190, 215, 232]),
    (40.0, 163, &[12, 20, 27, 36, 44, 53, 63, 73, 84, 95, 108, 121, 135, 151, 163]),
    (45.0, 125, &[11, 17, 24, 31, 39, 46, 55, 63, 72, 82, 92, 102, 114, 125]),
    (50.0, 92, &[9, 15, 21, 28, 34, 41, 48, 56, 63, 71, 80, 89, 92]),
    (55.0, 74, &[8, 14, 19, 25, 31, 37, 43, 50, 56, 63, 71, 74]),
    (60.0, 63, &[7, 12, 17, 22, 28, 33, 39, 45, 51, 57, 63]),
    (70.0, 48, &[6, 10, 14, 19, 23, 28, 32, 37, 42, 48]),
    (80.0, 39, &[5, 9, 12, 16, 20, 24, 28, 32, 36, 39]),
    (90.0, 33, &[4, 7, 11, 14, 17, 21, 24, 28, 31, 33]),
    (100.0, 25, &[4, 6, 9, 12, 15, 18, 21, 25]),
    (110.0, 20, &[3, 6, 8, 11, 14, 16, 19, 20]),
    (120.0, 15, &[3, 5, 7, 10, 12, 15]),
    (130.0, 12, &[2, 4, 6, 9, 11, 12]),
    (140.0, 10, &[2, 4, 6, 8, 10]),
    (150.0, 8, &[2, 3, 5, 7, 8]),
    (160.0, 7, &[1, 3, 5, 6, 7]),
    (170.0, 6, &[1, 2, 4, 6]),
    (180.0, 6, &[1, 2, 4, 5, 6]),
    (190.0, 5, &[1, 2, 3, 5]),
];

/// Table 9-8 (upper): surface interval credit. Each starting group maps to
/// contiguous inclusive minute ranges from zero and the group reached.
#[rustfmt::skip]
const SURFACE_INTERVAL: &[(GroupLetter, &[(u32, u32, GroupLetter)])] = &[
    (
        A,
        &[(0, 720, A)],
    ),
    (
        B,
        &[(0, 120, B), (121, 840, A)],
    ),
    (
        C,
        &[(0, 70, C), (71, 190, B), (191, 910, A)],
    ),
    (
        D,
        &[(0, 49, D), (50, 120, C), (121, 240, B), (241, 960, A)],
    ),
    (
        E,
        &[(0, 38, E), (39, 88, D), (89, 158, C), (159, 278, B), (279, 998, A)],
    ),
    (
        F,
        &[(0, 31, F), (32, 70, E), (71, 120, D), (121, 190, C), (191, 310, B), (311, 1030, A)],
    ),
    (
        G,
        &[(0, 26, G), (27, 58, F), (59, 96, E), (97, 146, D), (147, 216, C), (217, 336, B), (337, 1056, A)],
    ),
    (
        H,
        &[(0, 23, H), (24, 49, G), (50, 81, F), (82, 120, E), (121, 169, D), (170, 240, C), (241, 360, B), (361, 1080, A)],
    ),
    (
        I,
        &[(0, 20, I), (21, 43, H), (44, 70, G), (71, 101, F), (102, 140, E), (141, 190, D), (191, 260, C), (261, 380, B), (381, 1100, A)],
    ),
    (
        J,
        &[(0, 18, J), (19, 38, I), (39, 61, H), (62, 88, G), (89, 120, F), (121, 158, E), (159, 208, D), (209, 278, C), (279, 398, B), (399, 1118, A)],
    ),
    (
        K,
        &[(0, 16, K), (17, 34, J), (35, 55, I), (56, 78, H), (79, 104, G), (105, 136, F), (137, 175, E), (176, 224, D), (225, 295, C), (296, 415, B), (416, 1135, A)],
    ),
    (
        L,
        &[(0, 15, L), (16, 31, K), (32, 49, J), (50, 70, I), (71, 93, H), (94, 120, G), (121, 151, F), (152, 190, E), (191, 240, D), (241, 310, C), (311, 430, B), (431, 1150, A)],
    ),
    (
        M,
        &[(0, 13, M), (14, 28, L), (29, 45, K), (46, 63, J), (64, 84, I), (85, 107, H), (108, 133, G), (134, 165, F), (166, 204, E), (205, 253, D), (254, 324, C), (325, 444, B), (445, 1164, A)],
    ),
    (
        N,
        &[(0, 12, N), (13, 26, M), (27, 41, L), (42, 58, K), (59, 76, J), (77, 96, I), (97, 120, H), (121, 146, G), (147, 178, F), (179, 216, E), (217, 266, D), (267, 336, C), (337, 456, B), (457, 1176, A)],
    ),
    (
        O,
        &[(0, 11, O), (12, 24, N), (25, 38, M), (39, 53, L), (54, 70, K), (71, 88, J), (89, 108, I), (109, 131, H), (132, 158, G), (159, 190, F), (191, 228, E), (229, 278, D), (279, 348, C), (349, 468, B), (469, 1188, A)],
    ),
    (
        Z,
        &[(0, 11, Z), (12, 23, O), (24, 35, N), (36, 49, M), (50, 64, L), (65, 81, K), (82, 99, J), (100, 120, I), (121, 143, H), (144, 169, G), (170, 201, F), (202, 240, E), (241, 289, D), (290, 360, C), (361, 480, B), (481, 1200, A)],
    ),
];

/// Table 9-8 (lower): residual nitrogen time (min) by group and depth class (fsw).
#[rustfmt::skip]
const RESIDUAL_NITROGEN: &[(GroupLetter, &[(f64, u32)])] = &[
    (
        A,
        &[(10.0, 57), (15.0, 36), (20.0, 26), (25.0, 20), (30.0, 17), (35.0, 14), (40.0, 12), (45.0, 11), (50.0, 9), (55.0, 8), (60.0, 7), (70.0, 6), (80.0, 5), (90.0, 4), (100.0, 4), (110.0, 3), (120.0, 3), (130.0, 2), (140.0, 2), (150.0, 2), (160.0, 1), (170.0, 1), (180.0, 1), (190.0, 1)],
    ),
    (
        B,
        &[(10.0, 101), (15.0, 60), (20.0, 43), (25.0, 33), (30.0, 27), (35.0, 23), (40.0, 20), (45.0, 17), (50.0, 15), (55.0, 14), (60.0, 12), (70.0, 10), (80.0, 9), (90.0, 7), (100.0, 6), (110.0, 6), (120.0, 5), (130.0, 4), (140.0, 4), (150.0, 3), (160.0, 3), (170.0, 2), (180.0, 2), (190.0, 2)],
    ),
    (
        C,
        &[(10.0, 158), (15.0, 88), (20.0, 61), (25.0, 47), (30.0, 38), (35.0, 32), (40.0, 27), (45.0, 24), (50.0, 21), (55.0, 19), (60.0, 17), (70.0, 14), (80.0, 12), (90.0, 11), (100.0, 9), (110.0, 8), (120.0, 7), (130.0, 6), (140.0, 6), (150.0, 5), (160.0, 5), (170.0, 4), (180.0, 4), (190.0, 3)],
    ),
    (
        D,
        &[(10.0, 245), (15.0, 121), (20.0, 82), (25.0, 62), (30.0, 50), (35.0, 42), (40.0, 36), (45.0, 31), (50.0, 28), (55.0, 25), (60.0, 22), (70.0, 19), (80.0, 16), (90.0, 14), (100.0, 12), (110.0, 11), (120.0, 10), (130.0, 9), (140.0, 8), (150.0, 7), (160.0, 6), (170.0, 6), (180.0, 5), (190.0, 5)],
    ),
    (
        E,
        &[(10.0, 426), (15.0, 163), (20.0, 106), (25.0, 78), (30.0, 62), (35.0, 52), (40.0, 44), (45.0, 39), (50.0, 34), (55.0, 31), (60.0, 28), (70.0, 23), (80.0, 20), (90.0, 17), (100.0, 15), (110.0, 14), (120.0, 12), (130.0, 11), (140.0, 10), (150.0, 8), (160.0, 7), (180.0, 6)],
    ),
    (
        F,
        &[(10.0, 427), (15.0, 217), (20.0, 133), (25.0, 97), (30.0, 76), (35.0, 63), (40.0, 53), (45.0, 46), (50.0, 41), (55.0, 37), (60.0, 33), (70.0, 28), (80.0, 24), (90.0, 21), (100.0, 18), (110.0, 16), (120.0, 15), (130.0, 12)],
    ),
    (
        G,
        &[(15.0, 297), (20.0, 165), (25.0, 117), (30.0, 91), (35.0, 74), (40.0, 63), (45.0, 55), (50.0, 48), (55.0, 43), (60.0, 39), (70.0, 32), (80.0, 28), (90.0, 24), (100.0, 21), (110.0, 19)],
    ),
    (
        H,
        &[(15.0, 449), (20.0, 205), (25.0, 140), (30.0, 107), (35.0, 87), (40.0, 73), (45.0, 63), (50.0, 56), (55.0, 50), (60.0, 45), (70.0, 37), (80.0, 32), (90.0, 28), (100.0, 25), (110.0, 20)],
    ),
    (
        I,
        &[(15.0, 450), (20.0, 256), (25.0, 166), (30.0, 125), (35.0, 100), (40.0, 84), (45.0, 72), (50.0, 63), (55.0, 56), (60.0, 51), (70.0, 42), (80.0, 36), (90.0, 31)],
    ),
    (
        J,
        &[(20.0, 330), (25.0, 198), (30.0, 145), (35.0, 115), (40.0, 95), (45.0, 82), (50.0, 71), (55.0, 63), (60.0, 57), (70.0, 48), (80.0, 39), (90.0, 33)],
    ),
    (
        K,
        &[(20.0, 461), (25.0, 236), (30.0, 167), (35.0, 131), (40.0, 108), (45.0, 92), (50.0, 80), (55.0, 71), (60.0, 63)],
    ),
    (
        L,
        &[(20.0, 462), (25.0, 285), (30.0, 193), (35.0, 148), (40.0, 121), (45.0, 102), (50.0, 89), (55.0, 74)],
    ),
    (
        M,
        &[(25.0, 354), (30.0, 223), (35.0, 168), (40.0, 135), (45.0, 114), (50.0, 92)],
    ),
    (
        N,
        &[(25.0, 469), (30.0, 260), (35.0, 190), (40.0, 151), (45.0, 125)],
    ),
    (
        O,
        &[(25.0, 992), (30.0, 307), (35.0, 215), (40.0, 163)],
    ),
    (
        Z,
        &[(25.0, 1102), (30.0, 371), (35.0, 232)],
    ),
];

/// Table 9-9: air decompression. Per depth class (fsw), each bottom-time class
/// (min) lists its in-water air stops as (stop depth fsw, minutes) and the
/// repetitive group on surfacing.
#[rustfmt::skip]
const AIR_DECOMPRESSION: &[(f64, &[(u32, &[(u32, u32)], GroupLetter)])] = &[
    (
        25.0,
        &[
            (1102, &[(20, 0)], Z),
            (1120, &[(20, 10)], Z),
            (1140, &[(20, 21)], Z),
            (1160, &[(20, 32)], Z),
            (1180, &[(20, 43)], Z),
            (1200, &[(20, 54)], Z),
            (1220, &[(20, 66)], Z),
            (1240, &[(20, 77)], Z),
        ],
    ),
    (
        30.0,
        &[
            (371, &[(20, 0)], Z),
            (380, &[(20, 6)], Z),
            (400, &[(20, 19)], Z),
            (420, &[(20, 33)], Z),
            (440, &[(20, 46)], Z),
            (460, &[(20, 59)], Z),
            (480, &[(20, 73)], Z),
            (500, &[(20, 86)], Z),
        ],
    ),
    (
        35.0,
        &[
            (232, &[(20, 0)], Z),
            (240, &[(20, 6)], Z),
            (260, &[(20, 22)], Z),
            (280, &[(20, 37)], Z),
            (300, &[(20, 53)], Z),
            (320, &[(20, 68)], Z),
            (340, &[(20, 84)], Z),
            (360, &[(20, 100)], Z),
        ],
    ),
    (
        40.0,
        &[
            (163, &[(20, 0)], O),
            (180, &[(20, 15)], Z),
            (200, &[(20, 33)], Z),
            (220, &[(20, 51)], Z),
            (240, &[(20, 68)], Z),
            (260, &[(20, 86)], Z),
            (280, &[(20, 104)], Z),
            (300, &[(20, 122)], Z),
        ],
    ),
    (
        45.0,
        &[
            (125, &[(20, 0)], N),
            (140, &[(20, 15)], O),
            (160, &[(20, 35)], Z),
            (180, &[(20, 55)], Z),
            (200, &[(20, 75)], Z),
            (220, &[(20, 95)], Z),
            (240, &[(20, 115)], Z),
            (260, &[(20, 135)], Z),
        ],
    ),
    (
        50.0,
        &[
            (92, &[(20, 0)], M),
            (100, &[(20, 9)], N),
            (110, &[(20, 20)], O),
            (120, &[(20, 31)], Z),
            (130, &[(30, 14), (20, 28)], Z),
            (140, &[(30, 17), (20, 36)], Z),
            (150, &[(30, 21), (20, 43)], Z),
            (160, &[(30, 25), (20, 51)], Z),
        ],
    ),
    (
        55.0,
        &[
            (74, &[(20, 0)], L),
            (80, &[(20, 7)], M),
            (90, &[(20, 20)], N),
            (100, &[(20, 32)], O),
            (110, &[(30, 14), (20, 30)], Z),
            (120, &[(30, 18), (20, 38)], Z),
            (130, &[(30, 22), (20, 46)], Z),
            (140, &[(30, 27), (20, 54)], Z),
        ],
    ),
    (
        60.0,
        &[
            (63, &[(20, 0)], K),
            (70, &[(20, 9)], L),
            (80, &[(20, 23)], M),
            (90, &[(20, 36)], N),
            (100, &[(30, 16), (20, 33)], O),
            (110, &[(30, 21), (20, 42)], Z),
            (120, &[(30, 25), (20, 51)], Z),
            (130, &[(30, 29), (20, 60)], Z),
        ],
    ),
    (
        70.0,
        &[
            (48, &[(20, 0)], J),
            (50, &[(20, 3)], K),
            (60, &[(20, 19)], L),
            (70, &[(20, 34)], M),
            (80, &[(30, 16), (20, 34)], N),
            (90, &[(30, 21), (20, 44)], O),
            (100, &[(40, 11), (30, 23), (20, 47)], Z),
            (110, &[(40, 13), (30, 27), (20, 56)], Z),
        ],
    ),
    (
        80.0,
        &[
            (39, &[(20, 0)], J),
            (40, &[(20, 2)], K),
            (45, &[(20, 11)], L),
            (50, &[(20, 20)], M),
            (55, &[(20, 28)], N),
            (60, &[(20, 37)], O),
            (65, &[(30, 15), (20, 31)], Z),
            (70, &[(30, 18), (20, 37)], Z),
        ],
    ),
    (
        90.0,
        &[
            (33, &[(20, 0)], J),
            (35, &[(20, 4)], K),
            (40, &[(20, 14)], L),
            (45, &[(20, 24)], M),
            (50, &[(20, 34)], N),
            (55, &[(30, 14), (20, 30)], O),
            (60, &[(30, 18), (20, 36)], Z),
            (65, &[(30, 21), (20, 43)], Z),
        ],
    ),
    (
        100.0,
        &[
            (25, &[(20, 0)], H),
            (30, &[(20, 11)], I),
            (35, &[(20, 22)], J),
            (40, &[(20, 33)], K),
            (45, &[(30, 14), (20, 30)], L),
            (50, &[(30, 18), (20, 38)], M),
            (55, &[(30, 22), (20, 45)], N),
            (60, &[(30, 26), (20, 52)], O),
        ],
    ),
    (
        110.0,
        &[
            (20, &[(20, 0)], H),
            (25, &[(20, 12)], I),
            (30, &[(20, 24)], J),
            (35, &[(20, 37)], K),
            (40, &[(30, 16), (20, 33)], L),
            (45, &[(30, 20), (20, 41)], M),
            (50, &[(30, 24), (20, 49)], N),
            (55, &[(40, 12), (30, 24), (20, 50)], O),
        ],
    ),
    (
        120.0,
        &[
            (15, &[(20, 0)], F),
            (20, &[(20, 13)], G),
            (25, &[(20, 27)], H),
            (30, &[(30, 13), (20, 27)], I),
            (35, &[(30, 17), (20, 36)], J),
            (40, &[(30, 22), (20, 45)], K),
            (45, &[(40, 11), (30, 22), (20, 47)], L),
            (50, &[(40, 13), (30, 26), (20, 54)], M),
        ],
    ),
    (
        130.0,
        &[
            (12, &[(20, 0)], F),
            (15, &[(20, 9)], G),
            (20, &[(20, 23)], H),
            (25, &[(20, 38)], I),
            (30, &[(30, 17), (20, 35)], J),
            (35, &[(30, 22), (20, 44)], K),
            (40, &[(40, 11), (30, 23), (20, 47)], L),
            (45, &[(40, 13), (30, 27), (20, 55)], M),
        ],
    ),
    (
        140.0,
        &[
            (10, &[(20, 0)], E),
            (15, &[(20, 16)], F),
            (20, &[(20, 31)], G),
            (25, &[(30, 15), (20, 32)], H),
            (30, &[(30, 20), (20, 42)], I),
            (35, &[(30, 26), (20, 52)], J),
            (40, &[(40, 13), (30, 26), (20, 54)], K),
            (45, &[(40, 15), (30, 31), (20, 63)], L),
        ],
    ),
    (
        150.0,
        &[
            (8, &[(20, 0)], E),
            (10, &[(20, 7)], F),
            (15, &[(20, 23)], G),
            (20, &[(30, 13), (20, 27)], H),
            (25, &[(30, 19), (20, 38)], I),
            (30, &[(30, 24), (20, 49)], J),
            (35, &[(40, 12), (30, 25), (20, 53)], K),
            (40, &[(40, 15), (30, 30), (20, 62)], L),
        ],
    ),
    (
        160.0,
        &[
            (7, &[(20, 0)], E),
            (10, &[(20, 11)], F),
            (15, &[(20, 28)], G),
            (20, &[(30, 15), (20, 31)], H),
            (25, &[(30, 21), (20, 43)], I),
            (30, &[(40, 11), (30, 23), (20, 48)], J),
            (35, &[(40, 14), (30, 28), (20, 58)], K),
            (40, &[(40, 16), (30, 33), (20, 68)], L),
        ],
    ),
    (
        170.0,
        &[
            (6, &[(20, 0)], D),
            (10, &[(20, 15)], E),
            (15, &[(20, 34)], F),
            (20, &[(30, 17), (20, 36)], G),
            (25, &[(30, 24), (20, 48)], H),
            (30, &[(40, 13), (30, 26), (20, 52)], I),
            (35, &[(40, 15), (30, 31), (20, 64)], J),
            (40, &[(50, 8), (40, 17), (30, 34), (20, 69)], K),
        ],
    ),
    (
        180.0,
        &[
            (6, &[(20, 0)], E),
            (10, &[(20, 16)], F),
            (15, &[(20, 36)], G),
            (20, &[(30, 18), (20, 38)], H),
            (25, &[(30, 25), (20, 51)], I),
            (30, &[(40, 13), (30, 27), (20, 56)], J),
            (35, &[(40, 16), (30, 33), (20, 67)], K),
            (40, &[(50, 9), (40, 18), (30, 36), (20, 73)], L),
        ],
    ),
    (
        190.0,
        &[
            (5, &[(20, 0)], D),
            (10, &[(20, 21)], E),
            (15, &[(30, 14), (20, 28)], F),
            (20, &[(30, 21), (20, 42)], G),
            (25, &[(40, 12), (30, 24), (20, 48)], H),
            (30, &[(40, 15), (30, 30), (20, 61)], I),
            (35, &[(50, 8), (40, 16), (30, 33), (20, 70)], J),
            (40, &[(50, 9), (40, 19), (30, 39), (20, 81)], K),
        ],
    ),
];

/// Table 9-4: altitude threshold (ft) and the factor converting actual depth
/// to sea-level equivalent depth.
const ALTITUDE_CORRECTION: &[(f64, f64)] = &[
    (1000.0, 1.037),
    (2000.0, 1.075),
    (3000.0, 1.116),
    (4000.0, 1.158),
    (5000.0, 1.202),
    (6000.0, 1.248),
    (7000.0, 1.296),
    (8000.0, 1.346),
    (9000.0, 1.399),
    (10000.0, 1.454),
];
