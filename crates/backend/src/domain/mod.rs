pub mod a001_incident;
