mod composite;
mod read;
