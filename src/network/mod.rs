mod routemap;

pub use routemap::RouteMap;
