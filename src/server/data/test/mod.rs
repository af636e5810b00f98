mod order;
mod table_group;
