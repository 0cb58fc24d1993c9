//! Normalized Bessel (Thomson) lowpass prototype poles
//!
//! Row `n - 1` holds the `n` poles of the order-`n` prototype as `(re, im)`
//! pairs. Conjugate pairs are stored adjacent, positive imaginary part first;
//! odd orders carry one real pole.

use crate::error::{OrderDiagnostics, SynthResult, SynthesisError};

/// Highest tabulated Bessel order.
pub const MAX_BESSEL_ORDER: i32 = 20;

#[rustfmt::skip]
static BESSEL_POLES: [&[(f64, f64)]; 20] = [
    &[(-1.000000, 0.000000)],
    &[(-1.500000, 0.866025), (-1.500000, -0.866025)],
    &[(-1.838907, 1.754381), (-1.838907, -1.754381), (-2.322185, 0.000000)],
    &[(-2.103789, 2.657418), (-2.103789, -2.657418), (-2.896211, 0.867234), (-2.896211, -0.867234)],
    &[
        (-2.324674, 3.571023), (-2.324674, -3.571023), (-3.646739, 0.000000), (-3.351956, 1.742661),
        (-3.351956, -1.742661),
    ],
    &[
        (-2.515932, 4.492673), (-2.515932, -4.492673), (-3.735708, 2.626272), (-3.735708, -2.626272),
        (-4.248359, 0.867510), (-4.248359, -0.867510),
    ],
    &[
        (-2.685677, 5.420694), (-2.685677, -5.420694), (-4.070139, 3.517174), (-4.070139, -3.517174),
        (-4.971787, 0.000000), (-4.758291, 1.739286), (-4.758291, -1.739286),
    ],
    &[
        (-2.838984, 6.353911), (-2.838984, -6.353911), (-4.368289, 4.414443), (-4.368289, -4.414443),
        (-5.204841, 2.616175), (-5.204841, -2.616175), (-5.587886, 0.867614), (-5.587886, -0.867614),
    ],
    &[
        (-2.979261, 7.291464), (-2.979261, -7.291464), (-4.638440, 5.317272), (-4.638440, -5.317272),
        (-5.604422, 3.498157), (-5.604422, -3.498157), (-6.297019, 0.000000), (-6.129368, 1.737848),
        (-6.129368, -1.737848),
    ],
    &[
        (-3.108916, 8.232699), (-3.108916, -8.232699), (-4.886220, 6.224985), (-4.886220, -6.224985),
        (-5.967528, 4.384947), (-5.967528, -4.384947), (-6.615291, 2.611568), (-6.615291, -2.611568),
        (-6.922045, 0.867665), (-6.922045, -0.867665),
    ],
    &[
        (-3.229722, 9.177112), (-3.229722, -9.177112), (-5.115648, 7.137021), (-5.115648, -7.137021),
        (-6.301337, 5.276192), (-6.301337, -5.276192), (-7.057892, 3.489015), (-7.057892, -3.489015),
        (-7.622340, 0.000000), (-7.484230, 1.737103), (-7.484230, -1.737103),
    ],
    &[
        (-3.343023, 10.124297), (-3.343023, -10.124297), (-5.329709, 8.052907), (-5.329709, -8.052907),
        (-6.611004, 6.171535), (-6.611004, -6.171535), (-7.465571, 4.370170), (-7.465571, -4.370170),
        (-7.997271, 2.609067), (-7.997271, -2.609067), (-8.253422, 0.867694), (-8.253422, -0.867694),
    ],
    &[
        (-3.449867, 11.073929), (-3.449867, -11.073929), (-5.530681, 8.972248), (-5.530681, -8.972248),
        (-6.900373, 7.070644), (-6.900373, -7.070644), (-7.844380, 5.254903), (-7.844380, -5.254903),
        (-8.470592, 3.483868), (-8.470592, -3.483868), (-8.947710, 0.000000), (-8.830252, 1.736666),
        (-8.830252, -1.736666),
    ],
    &[
        (-3.551087, 12.025738), (-3.551087, -12.025738), (-5.720352, 9.894708), (-5.720352, -9.894708),
        (-7.172396, 7.973217), (-7.172396, -7.973217), (-8.198847, 6.143041), (-8.198847, -6.143041),
        (-8.911001, 4.361604), (-8.911001, -4.361604), (-9.363146, 2.607553), (-9.363146, -2.607553),
        (-9.583171, 0.867711), (-9.583171, -0.867711),
    ],
    &[
        (-3.647357, 12.979501), (-3.647357, -12.979501), (-5.900152, 10.819999), (-5.900152, -10.819999),
        (-7.429397, 8.878983), (-7.429397, -8.878983), (-8.532459, 7.034394), (-8.532459, -7.034394),
        (-9.323599, 5.242259), (-9.323599, -5.242259), (-9.859567, 3.480671), (-9.859567, -3.480671),
        (-10.273109, 0.000000), (-10.170914, 1.736389), (-10.170914, -1.736389),
    ],
    &[
        (-3.739232, 13.935028), (-3.739232, -13.935028), (-6.071241, 11.747875), (-6.071241, -11.747875),
        (-7.673241, 9.787697), (-7.673241, -9.787697), (-8.847968, 7.928773), (-8.847968, -7.928773),
        (-9.712326, 6.125761), (-9.712326, -6.125761), (-10.325121, 4.356163), (-10.325121, -4.356163),
        (-10.911887, 0.867721), (-10.911887, -0.867721), (-10.718985, 2.606568), (-10.718985, -2.606568),
    ],
    &[
        (-3.827174, 14.892159), (-3.827174, -14.892159), (-6.234581, 12.678120), (-6.234581, -12.678120),
        (-7.905450, 10.699145), (-7.905450, -10.699145), (-9.147588, 8.825998), (-9.147588, -8.825998),
        (-10.080296, 7.012010), (-10.080296, -7.012010), (-10.764132, 5.234075), (-10.764132, -5.234075),
        (-11.233439, 3.478542), (-11.233439, -3.478542), (-11.598530, 0.000000), (-11.508076, 1.736203),
        (-11.508076, -1.736203),
    ],
    &[
        (-3.911572, 15.850754), (-3.911572, -15.850754), (-6.390973, 13.610547), (-6.390973, -13.610547),
        (-8.127284, 11.613132), (-8.127284, -11.613132), (-9.433133, 9.725901), (-9.433133, -9.725901),
        (-10.430010, 7.900893), (-10.430010, -7.900893), (-11.180044, 6.114391), (-11.180044, -6.114391),
        (-11.718943, 4.352488), (-11.718943, -4.352488), (-12.068139, 2.605877), (-12.068139, -2.605877),
        (-12.239902, 0.867741), (-12.239902, -0.867741),
    ],
    &[
        (-3.992759, 16.810692), (-3.992759, -16.810692), (-6.541095, 14.544991), (-6.541095, -14.544991),
        (-8.339801, 12.529484), (-8.339801, -12.529484), (-9.706101, 10.628321), (-9.706101, -10.628321),
        (-10.763544, 8.792290), (-10.763544, -8.792290), (-11.575589, 6.997092), (-11.575589, -6.997092),
        (-12.179243, 5.228415), (-12.179243, -5.228415), (-12.597062, 3.477100), (-12.597062, -3.477100),
        (-12.923980, 0.000000), (-12.842816, 1.736037), (-12.842816, -1.736037),
    ],
    &[
        (-4.071019, 17.771869), (-4.071019, -17.771869), (-6.685527, 15.481306), (-6.685527, -15.481306),
        (-8.543895, 13.448046), (-8.543895, -13.448046), (-9.967765, 11.533112), (-9.967765, -11.533112),
        (-11.082571, 9.686112), (-11.082571, -9.686112), (-11.953103, 7.881991), (-11.953103, -7.881991),
        (-12.617294, 6.106632), (-12.617294, -6.106632), (-13.098755, 4.349634), (-13.098755, -4.349634),
        (-13.567377, 0.867486), (-13.567377, -0.867486), (-13.412693, 2.605660), (-13.412693, -2.605660),
    ],
];

/// Poles of the order-`order` Bessel prototype.
///
/// Fails with `OrderInvalid` for orders outside `1..=20`.
pub fn poles(order: i32) -> SynthResult<&'static [(f64, f64)]> {
    if !(1..=MAX_BESSEL_ORDER).contains(&order) {
        return Err(SynthesisError::OrderInvalid {
            order,
            diagnostics: OrderDiagnostics::Table {
                max_order: MAX_BESSEL_ORDER,
            },
        });
    }
    Ok(BESSEL_POLES[(order - 1) as usize])
}
