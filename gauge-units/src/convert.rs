//! Unit conversion functions for the plugin registry

use gauge_plugin::prelude::*;
use crate::Quantity;

/// Shared body of the six `convert_<quantity>` functions
fn convert_call(name: &str, quantity: Quantity, args: &[Value]) -> Value {
    if args.len() != 3 {
        return Value::Error(GaugeError::arg_count(name, 3, args.len()));
    }
    if let Some(e) = args.iter().find_map(Value::as_error) {
        return Value::Error(e.clone());
    }

    let value = match args[0].as_number() {
        Some(n) => n,
        None => return Value::Error(GaugeError::arg_type(name, "value", "Number", args[0].type_name())),
    };

    let from = match args[1].as_text() {
        Some(s) => s,
        None => return Value::Error(GaugeError::arg_type(name, "from_unit", "Text", args[1].type_name())),
    };

    let to = match args[2].as_text() {
        Some(s) => s,
        None => return Value::Error(GaugeError::arg_type(name, "to_unit", "Text", args[2].type_name())),
    };

    match quantity.convert(value, from, to) {
        Ok(result) => Value::Number(result),
        Err(e) => Value::Error(e.into()),
    }
}

// ============ convert_length ============

pub struct ConvertLength;

static CONVERT_LENGTH_ARGS: [ArgMeta; 3] = [
    ArgMeta::required("value", "Number", "Value to convert"),
    ArgMeta::required("from_unit", "Text", "Source unit (m, km, cm, mm, µm, nm, in, ft, yd, mi, nmi, ly)"),
    ArgMeta::required("to_unit", "Text", "Target unit"),
];

static CONVERT_LENGTH_EXAMPLES: [&str; 3] = [
    "convert_length(1000, \"m\", \"km\") → 1",
    "convert_length(1, \"mi\", \"m\") → 1609.34",
    "convert_length(3, \"ft\", \"in\") → 36",
];

static CONVERT_LENGTH_RELATED: [&str; 2] = ["convert_area", "list_units"];

impl FunctionPlugin for ConvertLength {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "convert_length",
            description: "Convert a length between two units",
            usage: "convert_length(value, from_unit, to_unit)",
            args: &CONVERT_LENGTH_ARGS,
            returns: "Number",
            examples: &CONVERT_LENGTH_EXAMPLES,
            category: "units",
            related: &CONVERT_LENGTH_RELATED,
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        convert_call("convert_length", Quantity::Length, args)
    }
}

// ============ convert_weight ============

pub struct ConvertWeight;

static CONVERT_WEIGHT_ARGS: [ArgMeta; 3] = [
    ArgMeta::required("value", "Number", "Value to convert"),
    ArgMeta::required("from_unit", "Text", "Source unit (g, kg, lb, oz, mg, ton, ct, stone, gr, dwt, t, ozt, mton, cwt, qtr, st, lb-t, lb-l, l-t, l-l)"),
    ArgMeta::required("to_unit", "Text", "Target unit"),
];

static CONVERT_WEIGHT_EXAMPLES: [&str; 2] = [
    "convert_weight(1000, \"g\", \"kg\") → 1",
    "convert_weight(1, \"oz\", \"g\") → 28.3495",
];

static CONVERT_WEIGHT_RELATED: [&str; 2] = ["convert_volume", "list_units"];

impl FunctionPlugin for ConvertWeight {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "convert_weight",
            description: "Convert a weight between two units",
            usage: "convert_weight(value, from_unit, to_unit)",
            args: &CONVERT_WEIGHT_ARGS,
            returns: "Number",
            examples: &CONVERT_WEIGHT_EXAMPLES,
            category: "units",
            related: &CONVERT_WEIGHT_RELATED,
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        convert_call("convert_weight", Quantity::Weight, args)
    }
}

// ============ convert_temperature ============

pub struct ConvertTemperature;

static CONVERT_TEMPERATURE_ARGS: [ArgMeta; 3] = [
    ArgMeta::required("value", "Number", "Temperature to convert"),
    ArgMeta::required("from_unit", "Text", "Source scale (C, F, K)"),
    ArgMeta::required("to_unit", "Text", "Target scale (C, F, K)"),
];

static CONVERT_TEMPERATURE_EXAMPLES: [&str; 3] = [
    "convert_temperature(0, \"C\", \"F\") → 32",
    "convert_temperature(32, \"F\", \"K\") → 273.15",
    "convert_temperature(300, \"K\", \"C\") → 26.85",
];

static CONVERT_TEMPERATURE_RELATED: [&str; 1] = ["list_units"];

impl FunctionPlugin for ConvertTemperature {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "convert_temperature",
            description: "Convert a temperature between Celsius, Fahrenheit and Kelvin",
            usage: "convert_temperature(value, from_unit, to_unit)",
            args: &CONVERT_TEMPERATURE_ARGS,
            returns: "Number",
            examples: &CONVERT_TEMPERATURE_EXAMPLES,
            category: "units",
            related: &CONVERT_TEMPERATURE_RELATED,
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        convert_call("convert_temperature", Quantity::Temperature, args)
    }
}

// ============ convert_volume ============

pub struct ConvertVolume;

static CONVERT_VOLUME_ARGS: [ArgMeta; 3] = [
    ArgMeta::required("value", "Number", "Value to convert"),
    ArgMeta::required("from_unit", "Text", "Source unit (ml, l, m3, gal, cup, fl-oz, tbsp, ...)"),
    ArgMeta::required("to_unit", "Text", "Target unit"),
];

static CONVERT_VOLUME_EXAMPLES: [&str; 2] = [
    "convert_volume(1000, \"ml\", \"l\") → 1",
    "convert_volume(1, \"gal\", \"m3\") → 0.00378541",
];

static CONVERT_VOLUME_RELATED: [&str; 2] = ["convert_weight", "list_units"];

impl FunctionPlugin for ConvertVolume {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "convert_volume",
            description: "Convert a volume between two units",
            usage: "convert_volume(value, from_unit, to_unit)",
            args: &CONVERT_VOLUME_ARGS,
            returns: "Number",
            examples: &CONVERT_VOLUME_EXAMPLES,
            category: "units",
            related: &CONVERT_VOLUME_RELATED,
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        convert_call("convert_volume", Quantity::Volume, args)
    }
}

// ============ convert_speed ============

pub struct ConvertSpeed;

static CONVERT_SPEED_ARGS: [ArgMeta; 3] = [
    ArgMeta::required("value", "Number", "Value to convert"),
    ArgMeta::required("from_unit", "Text", "Source unit (m/s, km/h, mi/h, ft/s, kn)"),
    ArgMeta::required("to_unit", "Text", "Target unit"),
];

static CONVERT_SPEED_EXAMPLES: [&str; 2] = [
    "convert_speed(1, \"m/s\", \"km/h\") → 3.6",
    "convert_speed(1, \"mi/h\", \"ft/s\") → 1.46667",
];

static CONVERT_SPEED_RELATED: [&str; 2] = ["convert_length", "list_units"];

impl FunctionPlugin for ConvertSpeed {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "convert_speed",
            description: "Convert a speed between two units",
            usage: "convert_speed(value, from_unit, to_unit)",
            args: &CONVERT_SPEED_ARGS,
            returns: "Number",
            examples: &CONVERT_SPEED_EXAMPLES,
            category: "units",
            related: &CONVERT_SPEED_RELATED,
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        convert_call("convert_speed", Quantity::Speed, args)
    }
}

// ============ convert_area ============

pub struct ConvertArea;

static CONVERT_AREA_ARGS: [ArgMeta; 3] = [
    ArgMeta::required("value", "Number", "Value to convert"),
    ArgMeta::required("from_unit", "Text", "Source unit (m2, km2, cm2, mm2, in2, ft2, mi2, ac, ha)"),
    ArgMeta::required("to_unit", "Text", "Target unit"),
];

static CONVERT_AREA_EXAMPLES: [&str; 2] = [
    "convert_area(1000000, \"m2\", \"km2\") → 1",
    "convert_area(1000, \"ft2\", \"m2\") → 92.903",
];

static CONVERT_AREA_RELATED: [&str; 2] = ["convert_length", "list_units"];

impl FunctionPlugin for ConvertArea {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "convert_area",
            description: "Convert an area between two units",
            usage: "convert_area(value, from_unit, to_unit)",
            args: &CONVERT_AREA_ARGS,
            returns: "Number",
            examples: &CONVERT_AREA_EXAMPLES,
            category: "units",
            related: &CONVERT_AREA_RELATED,
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        convert_call("convert_area", Quantity::Area, args)
    }
}

// ============ list_units ============

pub struct ListUnits;

static LIST_UNITS_ARGS: [ArgMeta; 2] = [
    ArgMeta::required("quantity", "Text", "length, weight, temperature, volume, speed or area"),
    ArgMeta::optional("from_unit", "Text", "Only list units this unit converts to", "none"),
];

static LIST_UNITS_EXAMPLES: [&str; 2] = [
    "list_units(\"speed\") → [\"m/s\", \"km/h\", \"mi/h\", \"ft/s\", \"kn\"]",
    "list_units(\"temperature\", \"K\") → [\"C\", \"F\"]",
];

static LIST_UNITS_RELATED: [&str; 2] = ["convert_length", "convert_temperature"];

impl FunctionPlugin for ListUnits {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "list_units",
            description: "List the unit symbols of a quantity, or the units one symbol converts to",
            usage: "list_units(quantity, [from_unit])",
            args: &LIST_UNITS_ARGS,
            returns: "List",
            examples: &LIST_UNITS_EXAMPLES,
            category: "units",
            related: &LIST_UNITS_RELATED,
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        if args.is_empty() || args.len() > 2 {
            return Value::Error(GaugeError::arg_count("list_units", 1, args.len()));
        }

        let name = match args[0].as_text() {
            Some(s) => s,
            None => return Value::Error(GaugeError::arg_type("list_units", "quantity", "Text", args[0].type_name())),
        };

        let quantity: Quantity = match name.parse() {
            Ok(q) => q,
            Err(e) => return Value::Error(GaugeError::from(e)),
        };

        let symbols = match args.get(1) {
            None | Some(Value::Null) => quantity.units(),
            Some(Value::Text(from)) => quantity.targets(from),
            Some(other) => {
                return Value::Error(GaugeError::arg_type("list_units", "from_unit", "Text", other.type_name()))
            }
        };

        Value::List(symbols.into_iter().map(Value::from).collect())
    }
}
