pub(crate) mod advent_api;
