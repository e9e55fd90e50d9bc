//! Weight units and their published conversion rates
//!
//! The table has no entry for megaton to tonne; that pair is unsupported.

use std::sync::LazyLock;
use crate::table::ConversionTable;
use crate::ConversionUnsupported;

unit_enum! {
    /// Units of weight (mass)
    pub enum WeightUnit: Weight {
        Gram => ("g", "gram"),
        Kilogram => ("kg", "kilogram"),
        Pound => ("lb", "pound"),
        Ounce => ("oz", "ounce"),
        Milligram => ("mg", "milligram"),
        Ton => ("ton", "ton"),
        Carat => ("ct", "carat"),
        Stone => ("stone", "stone"),
        Grain => ("gr", "grain"),
        Pennyweight => ("dwt", "pennyweight"),
        Tonne => ("t", "tonne"),
        TroyOunce => ("ozt", "troy ounce"),
        Megaton => ("mton", "megaton"),
        Hundredweight => ("cwt", "hundredweight"),
        Quarter => ("qtr", "quarter"),
        ShortTon => ("st", "short ton"),
        LongTon => ("lb-t", "long ton"),
        Livre => ("lb-l", "livre"),
        Quintal => ("l-t", "quintal"),
        Libra => ("l-l", "libra"),
    }
}

static WEIGHT: LazyLock<ConversionTable<WeightUnit>> = LazyLock::new(|| {
    use WeightUnit::*;
    ConversionTable::new()
        .rates(
            Gram,
            &[
                (Kilogram, 0.001), (Pound, 0.00220462), (Ounce, 0.035274), (Milligram, 1000.0),
                (Ton, 0.000001), (Carat, 5.0), (Stone, 0.000157473), (Grain, 15.4324),
                (Pennyweight, 0.64301493), (Tonne, 1e-6), (TroyOunce, 3.21507466e-5), (Megaton, 1e-9),
                (Hundredweight, 0.0000196841), (Quarter, 0.0000393682), (ShortTon, 0.000157473), (LongTon, 0.0000022046),
                (Livre, 0.0022046), (Quintal, 0.000001), (Libra, 1.0),
            ],
        )
        .rates(
            Kilogram,
            &[
                (Gram, 1000.0), (Pound, 2.20462), (Ounce, 35.274), (Milligram, 1000000.0),
                (Ton, 0.001), (Carat, 5000.0), (Stone, 0.157473), (Grain, 15432.3584),
                (Pennyweight, 643.01493), (Tonne, 0.001), (TroyOunce, 32.1507466), (Megaton, 0.000001),
                (Hundredweight, 0.0196841315), (Quarter, 0.039368263), (ShortTon, 0.157473), (LongTon, 0.00220462),
                (Livre, 2.20462), (Quintal, 0.001), (Libra, 1000.0),
            ],
        )
        .rates(
            Pound,
            &[
                (Gram, 453.592), (Kilogram, 0.453592), (Ounce, 16.0), (Milligram, 453592.0),
                (Ton, 0.000453592), (Carat, 2267.96185), (Stone, 0.0714286), (Grain, 7000.0),
                (Pennyweight, 291.666667), (Tonne, 0.000453592), (TroyOunce, 14.5833333), (Megaton, 0.000000454),
                (Hundredweight, 0.00892857143), (Quarter, 0.0178571429), (ShortTon, 0.0714286), (LongTon, 0.0001),
                (Livre, 1.0), (Quintal, 0.000453592), (Libra, 453.592),
            ],
        )
        .rates(
            Ounce,
            &[
                (Gram, 28.3495), (Kilogram, 0.0283495), (Pound, 0.0625), (Milligram, 28349.5),
                (Ton, 0.00003125), (Carat, 141.748), (Stone, 0.00446429), (Grain, 437.5),
                (Pennyweight, 18.2291667), (Tonne, 0.0000283495), (TroyOunce, 1.0), (Megaton, 2.83495e-8),
                (Hundredweight, 0.00551000383), (Quarter, 0.0110200077), (ShortTon, 0.00446429), (LongTon, 6.25e-5),
                (Livre, 0.0625), (Quintal, 2.83495e-5), (Libra, 28.3495),
            ],
        )
        .rates(
            Milligram,
            &[
                (Gram, 0.001), (Kilogram, 0.000001), (Pound, 0.0000022046), (Ounce, 0.000035274),
                (Ton, 1e-9), (Carat, 0.005), (Stone, 1.57473e-7), (Grain, 0.0154324),
                (Pennyweight, 6.43015e-7), (Tonne, 1e-9), (TroyOunce, 3.21507e-8), (Megaton, 1e-12),
                (Hundredweight, 1.96841e-8), (Quarter, 3.93682e-8), (ShortTon, 1.57473e-7), (LongTon, 2.2046e-9),
                (Livre, 2.2046e-6), (Quintal, 1e-9), (Libra, 0.001),
            ],
        )
        .rates(
            Ton,
            &[
                (Gram, 1e+6), (Kilogram, 1000.0), (Pound, 2204.62), (Ounce, 35274.0),
                (Milligram, 1e+9), (Carat, 5e+6), (Stone, 157.473), (Grain, 1.54324e+6),
                (Pennyweight, 6.43015e+7), (Tonne, 1.0), (TroyOunce, 3.21507e+7), (Megaton, 0.001),
                (Hundredweight, 1968.41), (Quarter, 3936.82), (ShortTon, 157.473), (LongTon, 2204.62),
                (Livre, 2.20462e+6), (Quintal, 1000.0), (Libra, 1e+6),
            ],
        )
        .rates(
            Carat,
            &[
                (Gram, 0.2), (Kilogram, 0.0002), (Pound, 0.000440925), (Ounce, 0.00705479),
                (Milligram, 200.0), (Ton, 0.0000002), (Stone, 0.00003125), (Grain, 3.08647),
                (Pennyweight, 0.1286), (Tonne, 2e-7), (TroyOunce, 0.005), (Megaton, 2e-10),
                (Hundredweight, 0.0000396843), (Quarter, 0.0000793686), (ShortTon, 0.00003125), (LongTon, 0.000000440925),
                (Livre, 0.000440925), (Quintal, 0.0000002), (Libra, 0.2),
            ],
        )
        .rates(
            Stone,
            &[
                (Gram, 6350.29), (Kilogram, 6.35029), (Pound, 14.0), (Ounce, 224.0),
                (Milligram, 6350290.0), (Ton, 0.00635029), (Carat, 32000.0), (Grain, 98000.0),
                (Pennyweight, 4032.0), (Tonne, 0.00635029), (TroyOunce, 204.1162), (Megaton, 6.35029e-6),
                (Hundredweight, 12.5), (Quarter, 25.0), (ShortTon, 1.0), (LongTon, 0.014),
                (Livre, 14.0), (Quintal, 0.00635029), (Libra, 6350.29),
            ],
        )
        .rates(
            Grain,
            &[
                (Gram, 0.0647989), (Kilogram, 6.47989e-5), (Pound, 0.000142857), (Ounce, 0.00228571),
                (Milligram, 64.7989), (Ton, 6.47989e-8), (Carat, 0.323994), (Stone, 0.0000102041),
                (Pennyweight, 0.0416667), (Tonne, 6.47989e-8), (TroyOunce, 0.00321507), (Megaton, 6.47989e-11),
                (Hundredweight, 6.47989e-5), (Quarter, 0.000129598), (ShortTon, 0.0000102041), (LongTon, 1.42857e-7),
                (Livre, 0.000142857), (Quintal, 6.47989e-8), (Libra, 0.0647989),
            ],
        )
        .rates(
            Pennyweight,
            &[
                (Gram, 1.55517), (Kilogram, 0.00155517), (Pound, 0.00342857), (Ounce, 0.0548571),
                (Milligram, 1555.17), (Ton, 0.00000155517), (Carat, 7.77699), (Stone, 0.000393757),
                (Grain, 24.0), (Tonne, 0.00155517), (TroyOunce, 49.614), (Megaton, 1.55517e-9),
                (Hundredweight, 0.00306108), (Quarter, 0.00612216), (ShortTon, 0.000393757), (LongTon, 0.00548214),
                (Livre, 0.00342857), (Quintal, 0.00155517), (Libra, 1555.17),
            ],
        )
        .rates(
            Tonne,
            &[
                (Gram, 1e+9), (Kilogram, 1e+6), (Pound, 2204620.0), (Ounce, 35274000.0),
                (Milligram, 1e+12), (Ton, 1000.0), (Carat, 5e+9), (Stone, 15747300.0),
                (Grain, 1.54324e+7), (Pennyweight, 6.43015e+10), (TroyOunce, 3.21507e+10), (Megaton, 1.0),
                (Hundredweight, 1968410.0), (Quarter, 3936820.0), (ShortTon, 15747300.0), (LongTon, 2204620.0),
                (Livre, 2.20462e+9), (Quintal, 1000.0), (Libra, 1e+9),
            ],
        )
        .rates(
            TroyOunce,
            &[
                (Gram, 31.1035), (Kilogram, 0.0311035), (Pound, 0.0685714), (Ounce, 1.09714),
                (Milligram, 31103.5), (Ton, 0.0000311035), (Carat, 155.517), (Stone, 0.0049335),
                (Grain, 480.0), (Pennyweight, 20.0), (Tonne, 0.0000311035), (Megaton, 3.11035e-8),
                (Hundredweight, 0.0610689), (Quarter, 0.122138), (ShortTon, 0.0049335), (LongTon, 6.85714e-5),
                (Livre, 0.0685714), (Quintal, 3.11035e-5), (Libra, 31.1035),
            ],
        )
        .rates(
            Megaton,
            &[
                (Gram, 1e+12), (Kilogram, 1e+9), (Pound, 2204620000.0), (Ounce, 3.5274e+10),
                (Milligram, 1e+15), (Ton, 1000.0), (Carat, 5e+12), (Stone, 1.57473e+8),
                (Grain, 1.54324e+9), (Pennyweight, 6.43015e+12), (TroyOunce, 3.21507e+12), (Hundredweight, 1.96841e+9),
                (Quarter, 3.93682e+9), (ShortTon, 1.57473e+8), (LongTon, 2204620000.0), (Livre, 2.20462e+12),
                (Quintal, 1000000.0), (Libra, 1e+12),
            ],
        )
        .rates(
            Hundredweight,
            &[
                (Gram, 50802.3), (Kilogram, 50.8023), (Pound, 112.0), (Ounce, 1792.0),
                (Milligram, 50802300.0), (Ton, 0.0508023), (Carat, 254011.5), (Stone, 8.0),
                (Grain, 78400.0), (Pennyweight, 32399.2), (Tonne, 0.0508023), (TroyOunce, 1600.0),
                (Megaton, 5.08023e-5), (Quarter, 2.0), (ShortTon, 8.0), (LongTon, 0.112),
                (Livre, 112.0), (Quintal, 0.0508023), (Libra, 50802.3),
            ],
        )
        .rates(
            Quarter,
            &[
                (Gram, 25401.2), (Kilogram, 25.4012), (Pound, 56.0), (Ounce, 896.0),
                (Milligram, 25401200.0), (Ton, 0.0254012), (Carat, 127005.75), (Stone, 4.0),
                (Grain, 39200.0), (Pennyweight, 16199.6), (Tonne, 0.0254012), (TroyOunce, 800.0),
                (Megaton, 2.54012e-5), (Hundredweight, 0.5), (ShortTon, 4.0), (LongTon, 0.056),
                (Livre, 56.0), (Quintal, 0.0254012), (Libra, 25401.2),
            ],
        )
        .rates(
            ShortTon,
            &[
                (Gram, 6350.29), (Kilogram, 6.35029), (Pound, 14.0), (Ounce, 224.0),
                (Milligram, 6350290.0), (Ton, 0.00635029), (Carat, 32000.0), (Stone, 0.0714286),
                (Grain, 98000.0), (Pennyweight, 4032.0), (Tonne, 0.00635029), (TroyOunce, 204.1162),
                (Megaton, 6.35029e-6), (Hundredweight, 12.5), (Quarter, 25.0), (LongTon, 0.014),
                (Livre, 14.0), (Quintal, 0.00635029), (Libra, 6350.29),
            ],
        )
        .rates(
            LongTon,
            &[
                (Gram, 453592.0), (Kilogram, 453.592), (Pound, 1000.0), (Ounce, 16000.0),
                (Milligram, 4.53592e+8), (Ton, 0.453592), (Carat, 2.26796e+6), (Stone, 71.4286),
                (Grain, 7000000.0), (Pennyweight, 291666.667), (Tonne, 0.000453592), (TroyOunce, 14583.3333),
                (Megaton, 4.53592e-7), (Hundredweight, 8.92857143), (Quarter, 17.8571429), (ShortTon, 71.4286),
                (Livre, 1000.0), (Quintal, 0.000453592), (Libra, 453.592),
            ],
        )
        .rates(
            Livre,
            &[
                (Gram, 453.592), (Kilogram, 0.453592), (Pound, 1.0), (Ounce, 16.0),
                (Milligram, 453592.0), (Ton, 0.000453592), (Carat, 2267.96185), (Stone, 0.0714286),
                (Grain, 7000.0), (Pennyweight, 291.666667), (Tonne, 0.000453592), (TroyOunce, 14.5833333),
                (Megaton, 4.53592e-7), (Hundredweight, 0.00892857143), (Quarter, 0.0178571429), (ShortTon, 0.0714286),
                (LongTon, 0.001), (Quintal, 0.000453592), (Libra, 1.0),
            ],
        )
        .rates(
            Quintal,
            &[
                (Gram, 1000000.0), (Kilogram, 1000.0), (Pound, 2204.62), (Ounce, 35274.0),
                (Milligram, 1e+9), (Ton, 0.001), (Carat, 5e+6), (Stone, 157.473),
                (Grain, 1.54324e+6), (Pennyweight, 6.43015e+7), (Tonne, 1.0), (TroyOunce, 3.21507e+7),
                (Megaton, 0.000001), (Hundredweight, 1968.41), (Quarter, 3936.82), (ShortTon, 157.473),
                (LongTon, 2204.62), (Livre, 2.20462e+6), (Libra, 1000000.0),
            ],
        )
        .rates(
            Libra,
            &[
                (Gram, 1.0), (Kilogram, 0.001), (Pound, 0.00220462), (Ounce, 0.035274),
                (Milligram, 1000.0), (Ton, 0.000001), (Carat, 5.0), (Stone, 0.000157473),
                (Grain, 15.4324), (Pennyweight, 0.64301493), (Tonne, 1e-6), (TroyOunce, 3.21507466e-5),
                (Megaton, 1e-9), (Hundredweight, 0.0000196841), (Quarter, 0.0000393682), (ShortTon, 0.000157473),
                (LongTon, 0.0000022046), (Livre, 0.0022046), (Quintal, 0.000001),
            ],
        )
});

pub fn weight_table() -> &'static ConversionTable<WeightUnit> {
    &WEIGHT
}

/// Convert `value` between two weight symbols (e.g., "g" to "kg")
pub fn convert_weight(value: f64, from: &str, to: &str) -> Result<f64, ConversionUnsupported> {
    WEIGHT.convert_symbols(value, from, to)
}
