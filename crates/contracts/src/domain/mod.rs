pub mod a001_contribuinte;
