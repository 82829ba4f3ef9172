pub mod trash_ports;
