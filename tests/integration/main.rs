mod shared;

mod wire;
