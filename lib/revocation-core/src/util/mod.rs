pub mod bitstring;
