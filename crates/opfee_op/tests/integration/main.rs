mod gas_price_oracle;
mod remote;
