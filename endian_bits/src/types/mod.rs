mod boolean;
mod code_unit;
mod decimal;
mod numeric;
